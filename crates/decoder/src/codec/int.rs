// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! 256-bit integers.
//!
//! Unsigned values use [`primitive_types::U256`]; signed values are a
//! two's-complement view over the same 32 bytes. Both are plain byte-layout
//! codecs: 32 little-endian bytes, no arithmetic beyond sign handling.

use super::cursor::ByteCursor;
use super::error::DecodeError;
use super::{Decode, Encode};
use primitive_types::U256;
use std::fmt;

impl Encode for U256 {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        dest.extend_from_slice(&self.to_little_endian());
    }

    fn size_hint(&self) -> usize {
        32
    }
}

impl Decode for U256 {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(U256::from_little_endian(&cursor.read_array::<32>()?))
    }
}

/// Signed 256-bit integer in two's-complement representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct I256(U256);

impl I256 {
    pub const ZERO: I256 = I256(U256([0, 0, 0, 0]));
    pub const MAX: I256 = I256(U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]));
    pub const MIN: I256 = I256(U256([0, 0, 0, 1 << 63]));

    pub fn from_bits(bits: U256) -> Self {
        I256(bits)
    }

    pub fn to_bits(self) -> U256 {
        self.0
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        I256(U256::from_little_endian(&bytes))
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        self.0.to_little_endian()
    }

    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    /// Magnitude without the sign. `MIN` maps to 2^255.
    pub fn unsigned_abs(&self) -> U256 {
        if self.is_negative() {
            (!self.0).overflowing_add(U256::one()).0
        } else {
            self.0
        }
    }

    pub fn to_i128(self) -> Option<i128> {
        let bytes = self.to_le_bytes();
        let fill = if self.is_negative() { 0xff } else { 0x00 };
        if bytes[16..].iter().any(|b| *b != fill) {
            return None;
        }
        let mut low = [0u8; 16];
        low.copy_from_slice(&bytes[..16]);
        let value = i128::from_le_bytes(low);
        // the sign of the truncated value must agree with the full value
        (value.is_negative() == self.is_negative()).then_some(value)
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        let mut bytes = if value < 0 { [0xff; 32] } else { [0x00; 32] };
        bytes[..16].copy_from_slice(&value.to_le_bytes());
        I256::from_le_bytes(bytes)
    }
}

impl From<i64> for I256 {
    fn from(value: i64) -> Self {
        I256::from(i128::from(value))
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Encode for I256 {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        dest.extend_from_slice(&self.to_le_bytes());
    }

    fn size_hint(&self) -> usize {
        32
    }
}

impl Decode for I256 {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(I256::from_le_bytes(cursor.read_array()?))
    }
}
