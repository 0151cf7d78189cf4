// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! XCM v0 location types.
//!
//! `JunctionV0` is the reference shape for every tagged union in this crate:
//! one discriminant byte in declaration order, then the active variant's
//! payload fields in fixed order. Custom `Serialize` implementations produce
//! the `{"Variant": payload}` JSON used by the REST API.
//!
//! Numeric payloads of these types are rendered with thousands separators
//! (`{"Parachain": "2,001"}`), which is how the REST API has always shown XCM
//! locations. Registry-decoded integers elsewhere in [`crate::value`] stay
//! plain decimal strings.

use crate::codec::{
    ByteCursor, Compact, Decode, DecodeError, Encode, Malformed, decode_byte_sequence,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

fn invalid_discriminant(type_name: &str, value: u8, variants: usize) -> DecodeError {
    Malformed::InvalidDiscriminant {
        type_name: type_name.to_string(),
        value,
        variants,
    }
    .into()
}

fn compact_u32(cursor: &mut ByteCursor<'_>) -> Result<u32, DecodeError> {
    Compact::<u32>::decode(cursor).map(|c| c.0)
}

// ============================================================================
// NetworkId
// ============================================================================

/// XCM v0 NetworkId enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkId {
    Any,
    Named(Vec<u8>),
    Polkadot,
    Kusama,
}

impl Encode for NetworkId {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            NetworkId::Any => dest.push(0),
            NetworkId::Named(name) => {
                dest.push(1);
                name.encode_to(dest);
            }
            NetworkId::Polkadot => dest.push(2),
            NetworkId::Kusama => dest.push(3),
        }
    }
}

impl Decode for NetworkId {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(NetworkId::Any),
            1 => Ok(NetworkId::Named(decode_byte_sequence(cursor)?.to_vec())),
            2 => Ok(NetworkId::Polkadot),
            3 => Ok(NetworkId::Kusama),
            other => Err(invalid_discriminant("NetworkId", other, 4)),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            NetworkId::Any => map.serialize_entry("Any", &serde_json::Value::Null)?,
            NetworkId::Named(name) => {
                map.serialize_entry("Named", &format!("0x{}", hex::encode(name)))?
            }
            NetworkId::Polkadot => map.serialize_entry("Polkadot", &serde_json::Value::Null)?,
            NetworkId::Kusama => map.serialize_entry("Kusama", &serde_json::Value::Null)?,
        }
        map.end()
    }
}

// ============================================================================
// BodyId / BodyPart
// ============================================================================

/// XCM v0 BodyId enum (used by Plurality junction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyId {
    Unit,
    Named(Vec<u8>),
    Index(u32),
    Executive,
    Technical,
    Legislative,
    Judicial,
}

impl Encode for BodyId {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            BodyId::Unit => dest.push(0),
            BodyId::Named(name) => {
                dest.push(1);
                name.encode_to(dest);
            }
            BodyId::Index(index) => {
                dest.push(2);
                Compact(*index).encode_to(dest);
            }
            BodyId::Executive => dest.push(3),
            BodyId::Technical => dest.push(4),
            BodyId::Legislative => dest.push(5),
            BodyId::Judicial => dest.push(6),
        }
    }
}

impl Decode for BodyId {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(BodyId::Unit),
            1 => Ok(BodyId::Named(decode_byte_sequence(cursor)?.to_vec())),
            2 => Ok(BodyId::Index(compact_u32(cursor)?)),
            3 => Ok(BodyId::Executive),
            4 => Ok(BodyId::Technical),
            5 => Ok(BodyId::Legislative),
            6 => Ok(BodyId::Judicial),
            other => Err(invalid_discriminant("BodyId", other, 7)),
        }
    }
}

impl Serialize for BodyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            BodyId::Unit => map.serialize_entry("Unit", &serde_json::Value::Null)?,
            BodyId::Named(name) => {
                map.serialize_entry("Named", &format!("0x{}", hex::encode(name)))?
            }
            BodyId::Index(idx) => {
                map.serialize_entry("Index", &format_number_with_commas(*idx as u128))?
            }
            BodyId::Executive => map.serialize_entry("Executive", &serde_json::Value::Null)?,
            BodyId::Technical => map.serialize_entry("Technical", &serde_json::Value::Null)?,
            BodyId::Legislative => map.serialize_entry("Legislative", &serde_json::Value::Null)?,
            BodyId::Judicial => map.serialize_entry("Judicial", &serde_json::Value::Null)?,
        }
        map.end()
    }
}

/// XCM v0 BodyPart enum (used by Plurality junction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPart {
    Voice,
    Members { count: u32 },
    Fraction { nom: u32, denom: u32 },
    AtLeastProportion { nom: u32, denom: u32 },
    MoreThanProportion { nom: u32, denom: u32 },
}

impl Encode for BodyPart {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            BodyPart::Voice => dest.push(0),
            BodyPart::Members { count } => {
                dest.push(1);
                Compact(*count).encode_to(dest);
            }
            BodyPart::Fraction { nom, denom } => {
                dest.push(2);
                Compact(*nom).encode_to(dest);
                Compact(*denom).encode_to(dest);
            }
            BodyPart::AtLeastProportion { nom, denom } => {
                dest.push(3);
                Compact(*nom).encode_to(dest);
                Compact(*denom).encode_to(dest);
            }
            BodyPart::MoreThanProportion { nom, denom } => {
                dest.push(4);
                Compact(*nom).encode_to(dest);
                Compact(*denom).encode_to(dest);
            }
        }
    }
}

impl Decode for BodyPart {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(BodyPart::Voice),
            1 => Ok(BodyPart::Members {
                count: compact_u32(cursor)?,
            }),
            2 => Ok(BodyPart::Fraction {
                nom: compact_u32(cursor)?,
                denom: compact_u32(cursor)?,
            }),
            3 => Ok(BodyPart::AtLeastProportion {
                nom: compact_u32(cursor)?,
                denom: compact_u32(cursor)?,
            }),
            4 => Ok(BodyPart::MoreThanProportion {
                nom: compact_u32(cursor)?,
                denom: compact_u32(cursor)?,
            }),
            other => Err(invalid_discriminant("BodyPart", other, 5)),
        }
    }
}

#[derive(Serialize)]
struct ProportionInner {
    nom: String,
    denom: String,
}

impl ProportionInner {
    fn new(nom: u32, denom: u32) -> Self {
        Self {
            nom: format_number_with_commas(nom as u128),
            denom: format_number_with_commas(denom as u128),
        }
    }
}

impl Serialize for BodyPart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            BodyPart::Voice => map.serialize_entry("Voice", &serde_json::Value::Null)?,
            BodyPart::Members { count } => {
                #[derive(Serialize)]
                struct Inner {
                    count: String,
                }
                map.serialize_entry(
                    "Members",
                    &Inner {
                        count: format_number_with_commas(*count as u128),
                    },
                )?
            }
            BodyPart::Fraction { nom, denom } => {
                map.serialize_entry("Fraction", &ProportionInner::new(*nom, *denom))?
            }
            BodyPart::AtLeastProportion { nom, denom } => {
                map.serialize_entry("AtLeastProportion", &ProportionInner::new(*nom, *denom))?
            }
            BodyPart::MoreThanProportion { nom, denom } => map.serialize_entry(
                "MoreThanProportion",
                &ProportionInner::new(*nom, *denom),
            )?,
        }
        map.end()
    }
}

// ============================================================================
// JunctionV0
// ============================================================================

/// XCM v0 Junction: one step of a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JunctionV0 {
    Parent,
    Parachain(u32),
    AccountId32 { network: NetworkId, id: [u8; 32] },
    AccountIndex64 { network: NetworkId, index: u64 },
    AccountKey20 { network: NetworkId, key: [u8; 20] },
    PalletInstance(u8),
    GeneralIndex(u128),
    GeneralKey(Vec<u8>),
    OnlyChild,
    Plurality { id: BodyId, part: BodyPart },
}

impl JunctionV0 {
    pub const VARIANT_COUNT: usize = 10;

    /// Discriminant written on the wire.
    pub fn index(&self) -> u8 {
        match self {
            JunctionV0::Parent => 0,
            JunctionV0::Parachain(_) => 1,
            JunctionV0::AccountId32 { .. } => 2,
            JunctionV0::AccountIndex64 { .. } => 3,
            JunctionV0::AccountKey20 { .. } => 4,
            JunctionV0::PalletInstance(_) => 5,
            JunctionV0::GeneralIndex(_) => 6,
            JunctionV0::GeneralKey(_) => 7,
            JunctionV0::OnlyChild => 8,
            JunctionV0::Plurality { .. } => 9,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            JunctionV0::Parent => "Parent",
            JunctionV0::Parachain(_) => "Parachain",
            JunctionV0::AccountId32 { .. } => "AccountId32",
            JunctionV0::AccountIndex64 { .. } => "AccountIndex64",
            JunctionV0::AccountKey20 { .. } => "AccountKey20",
            JunctionV0::PalletInstance(_) => "PalletInstance",
            JunctionV0::GeneralIndex(_) => "GeneralIndex",
            JunctionV0::GeneralKey(_) => "GeneralKey",
            JunctionV0::OnlyChild => "OnlyChild",
            JunctionV0::Plurality { .. } => "Plurality",
        }
    }
}

impl Encode for JunctionV0 {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        dest.push(self.index());
        match self {
            JunctionV0::Parent | JunctionV0::OnlyChild => {}
            JunctionV0::Parachain(id) => Compact(*id).encode_to(dest),
            JunctionV0::AccountId32 { network, id } => {
                network.encode_to(dest);
                id.encode_to(dest);
            }
            JunctionV0::AccountIndex64 { network, index } => {
                network.encode_to(dest);
                Compact(*index).encode_to(dest);
            }
            JunctionV0::AccountKey20 { network, key } => {
                network.encode_to(dest);
                key.encode_to(dest);
            }
            JunctionV0::PalletInstance(index) => index.encode_to(dest),
            JunctionV0::GeneralIndex(index) => Compact(*index).encode_to(dest),
            JunctionV0::GeneralKey(key) => key.encode_to(dest),
            JunctionV0::Plurality { id, part } => {
                id.encode_to(dest);
                part.encode_to(dest);
            }
        }
    }
}

impl Decode for JunctionV0 {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        match cursor.read_byte()? {
            0 => Ok(JunctionV0::Parent),
            1 => Ok(JunctionV0::Parachain(compact_u32(cursor)?)),
            2 => Ok(JunctionV0::AccountId32 {
                network: NetworkId::decode(cursor)?,
                id: <[u8; 32]>::decode(cursor)?,
            }),
            3 => Ok(JunctionV0::AccountIndex64 {
                network: NetworkId::decode(cursor)?,
                index: Compact::<u64>::decode(cursor)?.0,
            }),
            4 => Ok(JunctionV0::AccountKey20 {
                network: NetworkId::decode(cursor)?,
                key: <[u8; 20]>::decode(cursor)?,
            }),
            5 => Ok(JunctionV0::PalletInstance(u8::decode(cursor)?)),
            6 => Ok(JunctionV0::GeneralIndex(Compact::<u128>::decode(cursor)?.0)),
            7 => Ok(JunctionV0::GeneralKey(decode_byte_sequence(cursor)?.to_vec())),
            8 => Ok(JunctionV0::OnlyChild),
            9 => Ok(JunctionV0::Plurality {
                id: BodyId::decode(cursor)?,
                part: BodyPart::decode(cursor)?,
            }),
            other => Err(invalid_discriminant(
                "JunctionV0",
                other,
                JunctionV0::VARIANT_COUNT,
            )),
        }
    }
}

impl Serialize for JunctionV0 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let name = self.variant_name();
        match self {
            JunctionV0::Parent | JunctionV0::OnlyChild => {
                map.serialize_entry(name, &serde_json::Value::Null)?
            }
            JunctionV0::Parachain(id) => {
                map.serialize_entry(name, &format_number_with_commas(*id as u128))?
            }
            JunctionV0::AccountId32 { network, id } => {
                map.serialize_entry(name, &NetworkKeyInner::new(network, "id", id))?
            }
            JunctionV0::AccountIndex64 { network, index } => {
                let inner = AccountIndex64Inner {
                    network,
                    index: *index,
                };
                map.serialize_entry(name, &inner)?
            }
            JunctionV0::AccountKey20 { network, key } => {
                map.serialize_entry(name, &NetworkKeyInner::new(network, "key", key))?
            }
            JunctionV0::PalletInstance(idx) => {
                map.serialize_entry(name, &format_number_with_commas(u128::from(*idx)))?
            }
            JunctionV0::GeneralIndex(idx) => {
                map.serialize_entry(name, &format_number_with_commas(*idx))?
            }
            JunctionV0::GeneralKey(key) => {
                map.serialize_entry(name, &format!("0x{}", hex::encode(key)))?
            }
            JunctionV0::Plurality { id, part } => {
                map.serialize_entry(name, &PluralityInner { id, part })?
            }
        }
        map.end()
    }
}

// Helper structs for JunctionV0 serialization
struct NetworkKeyInner<'a> {
    network: &'a NetworkId,
    key_name: &'static str,
    key: &'a [u8],
}

impl<'a> NetworkKeyInner<'a> {
    fn new(network: &'a NetworkId, key_name: &'static str, key: &'a [u8]) -> Self {
        Self {
            network,
            key_name,
            key,
        }
    }
}

impl Serialize for NetworkKeyInner<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("network", self.network)?;
        map.serialize_entry(self.key_name, &format!("0x{}", hex::encode(self.key)))?;
        map.end()
    }
}

struct AccountIndex64Inner<'a> {
    network: &'a NetworkId,
    index: u64,
}

impl Serialize for AccountIndex64Inner<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("network", self.network)?;
        map.serialize_entry("index", &format_number_with_commas(self.index as u128))?;
        map.end()
    }
}

#[derive(Serialize)]
struct PluralityInner<'a> {
    id: &'a BodyId,
    part: &'a BodyPart,
}

/// Format a number with comma separators (e.g., 2001 -> "2,001").
pub fn format_number_with_commas(n: u128) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
