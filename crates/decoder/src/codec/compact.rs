// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compact (variable-length) unsigned integers.
//!
//! The two low bits of the first byte select the mode:
//! - `0b00`: single byte, value in the upper six bits (0..=63)
//! - `0b01`: two bytes little-endian, value in the upper 14 bits
//! - `0b10`: four bytes little-endian, value in the upper 30 bits
//! - `0b11`: big-integer mode, upper six bits hold `byte_count - 4`, followed by
//!   the value in `byte_count` little-endian bytes. Values up to 256 bits are
//!   supported.

use super::cursor::ByteCursor;
use super::error::{DecodeError, Malformed};
use super::{Decode, Encode};
use primitive_types::U256;
use serde::Deserialize;

const SINGLE_BYTE_MAX: u128 = 0b0011_1111;
const TWO_BYTE_MAX: u128 = 0b0011_1111_1111_1111;
const FOUR_BYTE_MAX: u128 = 0x3FFF_FFFF;

/// Whether non-minimal compact encodings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompactPolicy {
    /// Reject encodings that use more bytes than the value needs.
    #[default]
    Canonical,
    /// Accept any well-formed mode regardless of length.
    Lenient,
}

/// Marks an unsigned integer as compact-encoded on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Compact<T>(pub T);

pub fn encode_compact(value: u128, dest: &mut Vec<u8>) {
    if value <= SINGLE_BYTE_MAX {
        dest.push((value as u8) << 2);
    } else if value <= TWO_BYTE_MAX {
        dest.extend_from_slice(&(((value as u16) << 2) | 0b01).to_le_bytes());
    } else if value <= FOUR_BYTE_MAX {
        dest.extend_from_slice(&(((value as u32) << 2) | 0b10).to_le_bytes());
    } else {
        let byte_count = big_mode_len(value);
        dest.push((((byte_count - 4) as u8) << 2) | 0b11);
        dest.extend_from_slice(&value.to_le_bytes()[..byte_count]);
    }
}

/// Number of bytes [`encode_compact`] writes for `value`.
pub fn compact_len(value: u128) -> usize {
    if value <= SINGLE_BYTE_MAX {
        1
    } else if value <= TWO_BYTE_MAX {
        2
    } else if value <= FOUR_BYTE_MAX {
        4
    } else {
        1 + big_mode_len(value)
    }
}

fn big_mode_len(value: u128) -> usize {
    (16 - value.leading_zeros() as usize / 8).max(4)
}

/// Encode a compact integer of up to 256 bits.
pub fn encode_compact_u256(value: &U256, dest: &mut Vec<u8>) {
    if value.bits() <= 128 {
        encode_compact(value.low_u128(), dest);
    } else {
        let byte_count = value.bits().div_ceil(8);
        dest.push((((byte_count - 4) as u8) << 2) | 0b11);
        dest.extend_from_slice(&value.to_little_endian()[..byte_count]);
    }
}

pub fn compact_len_u256(value: &U256) -> usize {
    if value.bits() <= 128 {
        compact_len(value.low_u128())
    } else {
        1 + value.bits().div_ceil(8)
    }
}

/// Decode a compact integer that must fit in 128 bits.
pub fn decode_compact(cursor: &mut ByteCursor<'_>) -> Result<u128, DecodeError> {
    let value = decode_compact_u256(cursor)?;
    if value.bits() > 128 {
        return Err(Malformed::CompactOverflow { target: "u128" }.into());
    }
    Ok(value.low_u128())
}

/// Decode a compact integer of up to 256 bits.
///
/// Big-integer mode can declare up to 67 bytes; payloads with more than 32
/// significant bytes are [`Malformed::CompactOverflow`].
pub fn decode_compact_u256(cursor: &mut ByteCursor<'_>) -> Result<U256, DecodeError> {
    let canonical = cursor.options().compact == CompactPolicy::Canonical;
    let prefix = cursor.peek_byte()?;

    let (value, minimum) = match prefix & 0b11 {
        0b00 => {
            cursor.read_byte()?;
            return Ok(U256::from(prefix >> 2));
        }
        0b01 => {
            let raw = u16::from_le_bytes(cursor.read_array()?);
            (u128::from(raw >> 2), SINGLE_BYTE_MAX + 1)
        }
        0b10 => {
            let raw = u32::from_le_bytes(cursor.read_array()?);
            (u128::from(raw >> 2), TWO_BYTE_MAX + 1)
        }
        _ => {
            let byte_count = usize::from(prefix >> 2) + 4;
            let mut inner = cursor.take(byte_count + 1)?;
            inner.read_byte()?;
            let bytes = inner.read_rest();

            let significant = bytes.iter().rposition(|b| *b != 0).map_or(0, |p| p + 1);
            if significant > 32 {
                return Err(Malformed::CompactOverflow { target: "U256" }.into());
            }
            let value = U256::from_little_endian(&bytes[..significant]);

            let non_minimal = value <= U256::from(FOUR_BYTE_MAX) || significant != byte_count;
            return check_minimal(value, non_minimal, canonical);
        }
    };

    check_minimal(U256::from(value), value < minimum, canonical)
}

fn check_minimal(value: U256, non_minimal: bool, canonical: bool) -> Result<U256, DecodeError> {
    if non_minimal {
        if canonical {
            return Err(Malformed::NonCanonicalCompact.into());
        }
        tracing::trace!(%value, "accepted non-minimal compact encoding");
    }
    Ok(value)
}

impl Encode for Compact<U256> {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        encode_compact_u256(&self.0, dest);
    }

    fn size_hint(&self) -> usize {
        compact_len_u256(&self.0)
    }
}

impl Decode for Compact<U256> {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        decode_compact_u256(cursor).map(Compact)
    }
}

macro_rules! impl_compact {
    ($($t:ty),*) => {$(
        impl Encode for Compact<$t> {
            fn encode_to(&self, dest: &mut Vec<u8>) {
                encode_compact(u128::from(self.0), dest);
            }

            fn size_hint(&self) -> usize {
                compact_len(u128::from(self.0))
            }
        }

        impl Decode for Compact<$t> {
            fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
                let value = decode_compact(cursor)?;
                <$t>::try_from(value)
                    .map(Compact)
                    .map_err(|_| Malformed::CompactOverflow { target: stringify!($t) }.into())
            }
        }

        impl From<$t> for Compact<$t> {
            fn from(value: $t) -> Self {
                Compact(value)
            }
        }
    )*};
}

impl_compact!(u8, u16, u32, u64, u128);
