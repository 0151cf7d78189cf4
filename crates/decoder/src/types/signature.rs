// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The signature block carried by signed extrinsics:
//! `[address] [signature] [era] [nonce: compact] [tip: compact]`.

use super::era::Era;
use crate::codec::{
    ByteCursor, Compact, Decode, DecodeError, Encode, compact_len, decode_byte_sequence,
    read_discriminant,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Sender address of a signed extrinsic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiAddress {
    Id([u8; 32]),
    Index(u32),
    Raw(Vec<u8>),
    Address32([u8; 32]),
    Address20([u8; 20]),
}

impl Encode for MultiAddress {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            MultiAddress::Id(id) => {
                dest.push(0);
                id.encode_to(dest);
            }
            MultiAddress::Index(index) => {
                dest.push(1);
                Compact(*index).encode_to(dest);
            }
            MultiAddress::Raw(raw) => {
                dest.push(2);
                raw.encode_to(dest);
            }
            MultiAddress::Address32(address) => {
                dest.push(3);
                address.encode_to(dest);
            }
            MultiAddress::Address20(address) => {
                dest.push(4);
                address.encode_to(dest);
            }
        }
    }

    fn size_hint(&self) -> usize {
        1 + match self {
            MultiAddress::Id(_) | MultiAddress::Address32(_) => 32,
            MultiAddress::Index(index) => compact_len(u128::from(*index)),
            MultiAddress::Raw(raw) => compact_len(raw.len() as u128) + raw.len(),
            MultiAddress::Address20(_) => 20,
        }
    }
}

impl Decode for MultiAddress {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(match read_discriminant(cursor, "MultiAddress", 5)? {
            0 => MultiAddress::Id(cursor.read_array()?),
            1 => MultiAddress::Index(Compact::<u32>::decode(cursor)?.0),
            2 => MultiAddress::Raw(decode_byte_sequence(cursor)?.to_vec()),
            3 => MultiAddress::Address32(cursor.read_array()?),
            _ => MultiAddress::Address20(cursor.read_array()?),
        })
    }
}

impl Serialize for MultiAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            MultiAddress::Id(id) => map.serialize_entry("id", &to_hex(id))?,
            MultiAddress::Index(index) => map.serialize_entry("index", &index.to_string())?,
            MultiAddress::Raw(raw) => map.serialize_entry("raw", &to_hex(raw))?,
            MultiAddress::Address32(address) => {
                map.serialize_entry("address32", &to_hex(address))?
            }
            MultiAddress::Address20(address) => {
                map.serialize_entry("address20", &to_hex(address))?
            }
        }
        map.end()
    }
}

/// Signature over the signed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSignature {
    Ed25519([u8; 64]),
    Sr25519([u8; 64]),
    Ecdsa([u8; 65]),
}

impl MultiSignature {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            MultiSignature::Ed25519(bytes) | MultiSignature::Sr25519(bytes) => bytes,
            MultiSignature::Ecdsa(bytes) => bytes,
        }
    }
}

impl Encode for MultiSignature {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        let index = match self {
            MultiSignature::Ed25519(_) => 0,
            MultiSignature::Sr25519(_) => 1,
            MultiSignature::Ecdsa(_) => 2,
        };
        dest.push(index);
        dest.extend_from_slice(self.as_bytes());
    }

    fn size_hint(&self) -> usize {
        1 + self.as_bytes().len()
    }
}

impl Decode for MultiSignature {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(match read_discriminant(cursor, "MultiSignature", 3)? {
            0 => MultiSignature::Ed25519(cursor.read_array()?),
            1 => MultiSignature::Sr25519(cursor.read_array()?),
            _ => MultiSignature::Ecdsa(cursor.read_array()?),
        })
    }
}

impl Serialize for MultiSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let name = match self {
            MultiSignature::Ed25519(_) => "ed25519",
            MultiSignature::Sr25519(_) => "sr25519",
            MultiSignature::Ecdsa(_) => "ecdsa",
        };
        map.serialize_entry(name, &to_hex(self.as_bytes()))?;
        map.end()
    }
}

/// Signer, signature and the transaction extra data (era, nonce, tip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrinsicSignature {
    pub signer: MultiAddress,
    pub signature: MultiSignature,
    pub era: Era,
    #[serde(serialize_with = "serialize_as_string")]
    pub nonce: u64,
    #[serde(serialize_with = "serialize_as_string")]
    pub tip: u128,
}

fn serialize_as_string<T: ToString, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

impl Encode for ExtrinsicSignature {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        self.signer.encode_to(dest);
        self.signature.encode_to(dest);
        self.era.encode_to(dest);
        Compact(self.nonce).encode_to(dest);
        Compact(self.tip).encode_to(dest);
    }

    fn size_hint(&self) -> usize {
        self.signer.size_hint()
            + self.signature.size_hint()
            + self.era.size_hint()
            + compact_len(u128::from(self.nonce))
            + compact_len(self.tip)
    }
}

impl Decode for ExtrinsicSignature {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            signer: MultiAddress::decode(cursor)?,
            signature: MultiSignature::decode(cursor)?,
            era: Era::decode(cursor)?,
            nonce: Compact::<u64>::decode(cursor)?.0,
            tip: Compact::<u128>::decode(cursor)?.0,
        })
    }
}
