// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Codec implementations for booleans, fixed-width integers, sequences, text,
//! fixed arrays, options and tuples.

use super::compact::{Compact, compact_len, encode_compact};
use super::cursor::ByteCursor;
use super::error::{DecodeError, Malformed};
use super::{Decode, Encode};

impl Encode for bool {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        dest.push(u8::from(*self));
    }

    fn size_hint(&self) -> usize {
        1
    }
}

impl Decode for bool {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Malformed::InvalidBool(other).into()),
        }
    }
}

macro_rules! impl_fixed_width {
    ($($t:ty),*) => {$(
        impl Encode for $t {
            fn encode_to(&self, dest: &mut Vec<u8>) {
                dest.extend_from_slice(&self.to_le_bytes());
            }

            fn size_hint(&self) -> usize {
                core::mem::size_of::<$t>()
            }
        }

        impl Decode for $t {
            fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
                Ok(<$t>::from_le_bytes(cursor.read_array()?))
            }
        }
    )*};
}

impl_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Read a compact length prefix as a `usize`.
pub fn decode_length(cursor: &mut ByteCursor<'_>) -> Result<usize, DecodeError> {
    let Compact(len) = Compact::<u32>::decode(cursor)?;
    usize::try_from(len).map_err(|_| Malformed::LengthOverflow(len).into())
}

fn encode_length(len: usize, dest: &mut Vec<u8>) {
    encode_compact(len as u128, dest);
}

impl<T: Encode> Encode for [T] {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        encode_length(self.len(), dest);
        for item in self {
            item.encode_to(dest);
        }
    }

    fn size_hint(&self) -> usize {
        compact_len(self.len() as u128) + self.iter().map(Encode::size_hint).sum::<usize>()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        self.as_slice().encode_to(dest);
    }

    fn size_hint(&self) -> usize {
        self.as_slice().size_hint()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let len = decode_length(cursor)?;
        // every element takes at least one byte, so the remaining input bounds
        // the allocation regardless of the declared length
        let mut items = Vec::with_capacity(len.min(cursor.remaining()));
        for _ in 0..len {
            items.push(T::decode(cursor)?);
        }
        Ok(items)
    }
}

impl Encode for str {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        encode_length(self.len(), dest);
        dest.extend_from_slice(self.as_bytes());
    }

    fn size_hint(&self) -> usize {
        compact_len(self.len() as u128) + self.len()
    }
}

impl Encode for String {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        self.as_str().encode_to(dest);
    }

    fn size_hint(&self) -> usize {
        self.as_str().size_hint()
    }
}

impl Decode for String {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let bytes = decode_byte_sequence(cursor)?;
        let text = std::str::from_utf8(bytes).map_err(Malformed::InvalidUtf8)?;
        Ok(text.to_owned())
    }
}

/// Read a compact-length-prefixed byte string without copying it.
pub fn decode_byte_sequence<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8], DecodeError> {
    let len = decode_length(cursor)?;
    cursor.read_bytes(len)
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        for item in self {
            item.encode_to(dest);
        }
    }

    fn size_hint(&self) -> usize {
        self.iter().map(Encode::size_hint).sum()
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let mut items = Vec::with_capacity(N.min(cursor.remaining()));
        for _ in 0..N {
            items.push(T::decode(cursor)?);
        }
        items
            .try_into()
            .map_err(|_| Malformed::ArrayLength { expected: N }.into())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            None => dest.push(0),
            Some(value) => {
                dest.push(1);
                value.encode_to(dest);
            }
        }
    }

    fn size_hint(&self) -> usize {
        1 + self.as_ref().map_or(0, Encode::size_hint)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(None),
            1 => T::decode(cursor).map(Some),
            other => Err(Malformed::InvalidOptionTag(other).into()),
        }
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        self.as_ref().encode_to(dest);
    }

    fn size_hint(&self) -> usize {
        self.as_ref().size_hint()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        T::decode(cursor).map(Box::new)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        (**self).encode_to(dest);
    }

    fn size_hint(&self) -> usize {
        (**self).size_hint()
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode_to(&self, dest: &mut Vec<u8>) {
                let ($($name,)+) = self;
                $($name.encode_to(dest);)+
            }

            #[allow(non_snake_case)]
            fn size_hint(&self) -> usize {
                let ($($name,)+) = self;
                0 $(+ $name.size_hint())+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
                Ok(($($name::decode(cursor)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
