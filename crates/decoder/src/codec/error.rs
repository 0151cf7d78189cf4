// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failure while decoding a value from SCALE bytes.
///
/// Both kinds are ordinary, recoverable results: no decode path panics on
/// truncated or hostile input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input: needed {needed} byte(s), {remaining} remaining")]
    UnexpectedEndOfInput { needed: usize, remaining: usize },

    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] Malformed),
}

impl DecodeError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, DecodeError::UnexpectedEndOfInput { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, DecodeError::MalformedEncoding(_))
    }
}

/// The specific way a byte pattern failed to match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("invalid boolean byte 0x{0:02x}")]
    InvalidBool(u8),

    #[error("invalid option presence byte 0x{0:02x}")]
    InvalidOptionTag(u8),

    #[error("discriminant {value} out of range for {type_name} ({variants} variants)")]
    InvalidDiscriminant {
        type_name: String,
        value: u8,
        variants: usize,
    },

    #[error("compact integer is not minimally encoded")]
    NonCanonicalCompact,

    #[error("compact integer does not fit in {target}")]
    CompactOverflow { target: &'static str },

    #[error("length prefix {0} does not fit in memory")]
    LengthOverflow(u32),

    #[error("fixed array expected {expected} elements")]
    ArrayLength { expected: usize },

    #[error("invalid UTF-8 in text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("invalid mortal era: period {period}, phase {phase}")]
    InvalidEra { period: u64, phase: u64 },

    #[error("{0} trailing byte(s) after value")]
    TrailingBytes(usize),
}
