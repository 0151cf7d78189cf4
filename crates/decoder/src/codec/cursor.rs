// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::compact::CompactPolicy;
use super::error::DecodeError;

/// Options that change how strictly bytes are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub compact: CompactPolicy,
}

impl DecodeOptions {
    pub fn lenient() -> Self {
        Self {
            compact: CompactPolicy::Lenient,
        }
    }
}

/// Exclusive read position over an immutable byte buffer.
///
/// Every read either advances the position by exactly the bytes it returns or
/// fails with [`DecodeError::UnexpectedEndOfInput`] and leaves the position
/// untouched.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
    options: DecodeOptions,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, DecodeOptions::default())
    }

    pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            bytes,
            position: 0,
            options,
        }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek_byte(&self) -> Result<u8, DecodeError> {
        self.bytes
            .get(self.position)
            .copied()
            .ok_or(DecodeError::UnexpectedEndOfInput {
                needed: 1,
                remaining: 0,
            })
    }

    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(DecodeError::UnexpectedEndOfInput {
                needed: len,
                remaining,
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.bytes[start..self.position])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Consume everything that is left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.position;
        self.position = self.bytes.len();
        &self.bytes[start..]
    }

    /// Split off the next `len` bytes as an independent cursor with the same
    /// options, advancing this cursor past them.
    pub fn take(&mut self, len: usize) -> Result<ByteCursor<'a>, DecodeError> {
        let bytes = self.read_bytes(len)?;
        Ok(ByteCursor::with_options(bytes, self.options))
    }
}
