// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Values produced by registry-driven decoding.
//!
//! JSON output follows the REST API conventions: integers are decimal
//! strings, byte strings are `0x`-prefixed hex, variants are
//! `{"Name": fields}` maps and composite fields keep declaration order.

use crate::codec::{I256, U256};
use crate::types::{Era, JunctionV0, MultiAddress};
use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    U256(U256),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    I256(I256),
    /// A compact-encoded unsigned integer, up to 256 bits wide.
    Compact(U256),
    Bytes(Vec<u8>),
    Text(String),
    /// Elements of a fixed array or a length-prefixed sequence.
    Sequence(Vec<DecodedValue>),
    Option(Option<Box<DecodedValue>>),
    Tuple(Vec<DecodedValue>),
    Composite(Vec<(String, DecodedValue)>),
    Variant {
        index: u8,
        name: String,
        fields: Vec<(String, DecodedValue)>,
    },
    Junction(JunctionV0),
    Address(MultiAddress),
    Era(Era),
}

impl DecodedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Any unsigned integer shape whose value fits in 128 bits.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            DecodedValue::U8(v) => Some(u128::from(*v)),
            DecodedValue::U16(v) => Some(u128::from(*v)),
            DecodedValue::U32(v) => Some(u128::from(*v)),
            DecodedValue::U64(v) => Some(u128::from(*v)),
            DecodedValue::U128(v) => Some(*v),
            DecodedValue::U256(v) | DecodedValue::Compact(v) => {
                (v.bits() <= 128).then_some(v.low_u128())
            }
            _ => None,
        }
    }

    /// Any unsigned integer shape.
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            DecodedValue::U256(v) | DecodedValue::Compact(v) => Some(*v),
            other => other.as_u128().map(U256::from),
        }
    }

    /// Any signed integer shape up to 128 bits.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            DecodedValue::I8(v) => Some(i128::from(*v)),
            DecodedValue::I16(v) => Some(i128::from(*v)),
            DecodedValue::I32(v) => Some(i128::from(*v)),
            DecodedValue::I64(v) => Some(i128::from(*v)),
            DecodedValue::I128(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DecodedValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Named field of a composite or variant value.
    pub fn field(&self, name: &str) -> Option<&DecodedValue> {
        match self {
            DecodedValue::Composite(fields) | DecodedValue::Variant { fields, .. } => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

/// Ordered `name -> value` pairs serialized as a JSON object.
pub(crate) struct FieldMap<'a>(pub &'a [(String, DecodedValue)]);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn serialize_list<S: Serializer>(items: &[DecodedValue], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl Serialize for DecodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DecodedValue::Bool(b) => serializer.serialize_bool(*b),
            DecodedValue::U8(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::U16(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::U32(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::U64(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::U128(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::U256(v) | DecodedValue::Compact(v) => {
                serializer.serialize_str(&v.to_string())
            }
            DecodedValue::I8(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::I16(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::I32(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::I64(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::I128(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::I256(v) => serializer.serialize_str(&v.to_string()),
            DecodedValue::Bytes(b) => serializer.serialize_str(&format!("0x{}", hex::encode(b))),
            DecodedValue::Text(s) => serializer.serialize_str(s),
            DecodedValue::Sequence(items) | DecodedValue::Tuple(items) => {
                serialize_list(items, serializer)
            }
            DecodedValue::Option(None) => serializer.serialize_none(),
            DecodedValue::Option(Some(inner)) => serializer.serialize_some(inner),
            DecodedValue::Composite(fields) => FieldMap(fields).serialize(serializer),
            DecodedValue::Variant { name, fields, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                if fields.is_empty() {
                    map.serialize_entry(name, &())?;
                } else {
                    map.serialize_entry(name, &FieldMap(fields))?;
                }
                map.end()
            }
            DecodedValue::Junction(junction) => junction.serialize(serializer),
            DecodedValue::Address(address) => address.serialize(serializer),
            DecodedValue::Era(era) => era.serialize(serializer),
        }
    }
}
