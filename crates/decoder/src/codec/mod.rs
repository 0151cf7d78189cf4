// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! SCALE codec primitives.
//!
//! Values are encoded by appending to a `Vec<u8>` and decoded from an
//! exclusively borrowed [`ByteCursor`]. Fixed-width integers are
//! little-endian, sequences and text carry a compact length prefix, fixed
//! arrays carry none, options and tagged unions lead with a single byte.

mod compact;
mod cursor;
mod error;
mod int;
mod primitives;

pub use compact::{
    Compact, CompactPolicy, compact_len, compact_len_u256, decode_compact, decode_compact_u256,
    encode_compact, encode_compact_u256,
};
pub use cursor::{ByteCursor, DecodeOptions};
pub use error::{DecodeError, Malformed};
pub use int::I256;
pub use primitive_types::U256;
pub use primitives::{decode_byte_sequence, decode_length};

/// A value with a SCALE byte representation.
pub trait Encode {
    /// Append the encoding of `self` to `dest`.
    fn encode_to(&self, dest: &mut Vec<u8>);

    /// Expected encoded length, used to pre-size buffers.
    fn size_hint(&self) -> usize {
        0
    }

    fn encode(&self) -> Vec<u8> {
        let mut dest = Vec::with_capacity(self.size_hint());
        self.encode_to(&mut dest);
        dest
    }
}

/// A value that can be read back from SCALE bytes.
pub trait Decode: Sized {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError>;
}

/// Decode a value that must span the whole of `bytes`.
pub fn decode_all<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    decode_all_with(bytes, DecodeOptions::default())
}

pub fn decode_all_with<T: Decode>(bytes: &[u8], options: DecodeOptions) -> Result<T, DecodeError> {
    let mut cursor = ByteCursor::with_options(bytes, options);
    let value = T::decode(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(Malformed::TrailingBytes(cursor.remaining()).into());
    }
    Ok(value)
}

/// Read the leading discriminant of a tagged union.
///
/// Anything at or beyond `variants` is rejected; there is no fallback variant.
pub fn read_discriminant(
    cursor: &mut ByteCursor<'_>,
    type_name: &str,
    variants: usize,
) -> Result<u8, DecodeError> {
    let index = cursor.read_byte()?;
    if usize::from(index) >= variants {
        return Err(Malformed::InvalidDiscriminant {
            type_name: type_name.to_string(),
            value: index,
            variants,
        }
        .into());
    }
    Ok(index)
}
