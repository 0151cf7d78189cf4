// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::DecodeError;
use crate::types::{BlockError, CallIndex};
use thiserror::Error;

/// Failure of a whole parse. Every variant that concerns a single extrinsic
/// names its position in the block.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Block(#[from] BlockError),

    #[error("block has {count} extrinsics, limit is {max}")]
    TooManyExtrinsics { count: usize, max: usize },

    #[error("extrinsic {index}: call {call_index} is not registered")]
    CallNotRegistered { index: usize, call_index: CallIndex },

    #[error("extrinsic {index}: failed to decode field '{field}' of {call}")]
    FieldDecodeFailed {
        index: usize,
        call: String,
        field: String,
        #[source]
        source: DecodeError,
    },

    #[error("extrinsic {index}: {remaining} unread argument byte(s) after {call}")]
    TrailingBytes {
        index: usize,
        call: String,
        remaining: usize,
    },

    #[error("extrinsic {index}: decode worker failed: {message}")]
    Worker { index: usize, message: String },
}

impl ParseError {
    /// Position of the failing extrinsic, when the error concerns one.
    pub fn extrinsic_index(&self) -> Option<usize> {
        match self {
            ParseError::Block(BlockError::InvalidHex { index, .. })
            | ParseError::Block(BlockError::Envelope { index, .. })
            | ParseError::CallNotRegistered { index, .. }
            | ParseError::FieldDecodeFailed { index, .. }
            | ParseError::TrailingBytes { index, .. }
            | ParseError::Worker { index, .. } => Some(*index),
            ParseError::TooManyExtrinsics { .. } => None,
        }
    }

    /// The innermost codec error, if decoding bytes is what failed.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            ParseError::Block(BlockError::Envelope { source, .. })
            | ParseError::FieldDecodeFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
