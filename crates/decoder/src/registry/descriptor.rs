// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field decode procedures.
//!
//! The set of shapes is closed: every field of a registered call is described
//! by a [`FieldType`], and decoding is an exhaustive match over it. Field
//! order is wire order; nothing on the wire names or delimits a field.

use crate::codec::{
    ByteCursor, Compact, Decode, DecodeError, I256, Malformed, U256, decode_byte_sequence,
    decode_length, read_discriminant,
};
use crate::types::{Era, JunctionV0, MultiAddress};
use crate::value::DecodedValue;
use serde::{Deserialize, Serialize};

/// Decode procedure for one field.
///
/// In JSON, shapes without parameters are plain strings (`"u32"`,
/// `"text"`, `"junctionV0"`) and parameterised shapes are single-key objects
/// (`{"sequence": "u8"}`, `{"array": {"len": 32, "element": "u8"}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    I8,
    I16,
    I32,
    I64,
    I128,
    I256,
    /// Compact unsigned integer, up to 256 bits.
    Compact,
    /// Length-prefixed raw bytes.
    Bytes,
    /// Length-prefixed UTF-8 text.
    Text,
    Array {
        len: usize,
        element: Box<FieldType>,
    },
    Sequence(Box<FieldType>),
    #[serde(rename = "option")]
    Optional(Box<FieldType>),
    Tuple(Vec<FieldType>),
    Composite(Vec<FieldDescriptor>),
    /// Variants in discriminant order.
    Variant(Vec<VariantDescriptor>),
    #[serde(rename = "junctionV0")]
    JunctionV0,
    MultiAddress,
    Era,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDescriptor {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl VariantDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A registered call: its name and the ordered fields of its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

fn decode_fields(
    fields: &[FieldDescriptor],
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<(String, DecodedValue)>, DecodeError> {
    fields
        .iter()
        .map(|field| Ok((field.name.clone(), field.ty.decode(cursor)?)))
        .collect()
}

/// Decode `len` elements after checking the input can possibly hold them.
///
/// Elements are counted as at least one byte each, so a hostile length can
/// never drive allocation or iteration past the size of the input.
fn decode_elements(
    element: &FieldType,
    len: usize,
    cursor: &mut ByteCursor<'_>,
) -> Result<Vec<DecodedValue>, DecodeError> {
    let needed = len.saturating_mul(element.min_encoded_len().max(1));
    if needed > cursor.remaining() {
        return Err(DecodeError::UnexpectedEndOfInput {
            needed,
            remaining: cursor.remaining(),
        });
    }
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(element.decode(cursor)?);
    }
    Ok(items)
}

impl FieldType {
    /// Lower bound on the encoded size of any value of this shape.
    pub fn min_encoded_len(&self) -> usize {
        match self {
            FieldType::Bool | FieldType::U8 | FieldType::I8 => 1,
            FieldType::U16 | FieldType::I16 => 2,
            FieldType::U32 | FieldType::I32 => 4,
            FieldType::U64 | FieldType::I64 => 8,
            FieldType::U128 | FieldType::I128 => 16,
            FieldType::U256 | FieldType::I256 => 32,
            FieldType::Array { len, element } => len.saturating_mul(element.min_encoded_len()),
            FieldType::Tuple(elements) => elements
                .iter()
                .fold(0, |acc, e| acc.saturating_add(e.min_encoded_len())),
            FieldType::Composite(fields) => fields
                .iter()
                .fold(0, |acc, f| acc.saturating_add(f.ty.min_encoded_len())),
            FieldType::Compact
            | FieldType::Bytes
            | FieldType::Text
            | FieldType::Sequence(_)
            | FieldType::Optional(_)
            | FieldType::Variant(_)
            | FieldType::JunctionV0
            | FieldType::MultiAddress
            | FieldType::Era => 1,
        }
    }

    /// Decode one value of this shape, advancing `cursor` past it.
    pub fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedValue, DecodeError> {
        let value = match self {
            FieldType::Bool => DecodedValue::Bool(bool::decode(cursor)?),
            FieldType::U8 => DecodedValue::U8(u8::decode(cursor)?),
            FieldType::U16 => DecodedValue::U16(u16::decode(cursor)?),
            FieldType::U32 => DecodedValue::U32(u32::decode(cursor)?),
            FieldType::U64 => DecodedValue::U64(u64::decode(cursor)?),
            FieldType::U128 => DecodedValue::U128(u128::decode(cursor)?),
            FieldType::U256 => DecodedValue::U256(U256::decode(cursor)?),
            FieldType::I8 => DecodedValue::I8(i8::decode(cursor)?),
            FieldType::I16 => DecodedValue::I16(i16::decode(cursor)?),
            FieldType::I32 => DecodedValue::I32(i32::decode(cursor)?),
            FieldType::I64 => DecodedValue::I64(i64::decode(cursor)?),
            FieldType::I128 => DecodedValue::I128(i128::decode(cursor)?),
            FieldType::I256 => DecodedValue::I256(I256::decode(cursor)?),
            FieldType::Compact => DecodedValue::Compact(Compact::<U256>::decode(cursor)?.0),
            FieldType::Bytes => DecodedValue::Bytes(decode_byte_sequence(cursor)?.to_vec()),
            FieldType::Text => DecodedValue::Text(String::decode(cursor)?),
            FieldType::Array { len, element } => {
                if **element == FieldType::U8 {
                    DecodedValue::Bytes(cursor.read_bytes(*len)?.to_vec())
                } else {
                    DecodedValue::Sequence(decode_elements(element, *len, cursor)?)
                }
            }
            FieldType::Sequence(element) => {
                if **element == FieldType::U8 {
                    DecodedValue::Bytes(decode_byte_sequence(cursor)?.to_vec())
                } else {
                    let len = decode_length(cursor)?;
                    DecodedValue::Sequence(decode_elements(element, len, cursor)?)
                }
            }
            FieldType::Optional(inner) => match cursor.read_byte()? {
                0 => DecodedValue::Option(None),
                1 => DecodedValue::Option(Some(Box::new(inner.decode(cursor)?))),
                other => return Err(Malformed::InvalidOptionTag(other).into()),
            },
            FieldType::Tuple(elements) => DecodedValue::Tuple(
                elements
                    .iter()
                    .map(|element| element.decode(cursor))
                    .collect::<Result<_, _>>()?,
            ),
            FieldType::Composite(fields) => {
                DecodedValue::Composite(decode_fields(fields, cursor)?)
            }
            FieldType::Variant(variants) => {
                let index = read_discriminant(cursor, "Variant", variants.len())?;
                let variant = &variants[usize::from(index)];
                DecodedValue::Variant {
                    index,
                    name: variant.name.clone(),
                    fields: decode_fields(&variant.fields, cursor)?,
                }
            }
            FieldType::JunctionV0 => DecodedValue::Junction(JunctionV0::decode(cursor)?),
            FieldType::MultiAddress => DecodedValue::Address(MultiAddress::decode(cursor)?),
            FieldType::Era => DecodedValue::Era(Era::decode(cursor)?),
        };
        Ok(value)
    }
}
