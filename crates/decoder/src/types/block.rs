// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw extrinsic envelopes and the block body that carries them.
//!
//! On chain every extrinsic is an opaque byte vector: a compact length
//! followed by `[version] [signature block if signed] [call index] [args]`.
//! Only the envelope is decoded here; the argument bytes stay raw until the
//! parser resolves the call index against a registry.

use super::{call_index::CallIndex, signature::ExtrinsicSignature};
use crate::codec::{
    ByteCursor, Compact, Decode, DecodeError, DecodeOptions, Encode, compact_len,
    decode_all_with, decode_length,
};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// High bit of the version byte: set when a signature block follows.
pub const SIGNED_BIT: u8 = 0b1000_0000;
/// Low bits of the version byte: the envelope format version.
pub const VERSION_MASK: u8 = 0b0111_1111;

/// The call carried by an extrinsic: its index and the still-encoded arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub call_index: CallIndex,
    pub args: Vec<u8>,
}

impl Call {
    pub fn new(call_index: impl Into<CallIndex>, args: Vec<u8>) -> Self {
        Self {
            call_index: call_index.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExtrinsic {
    /// Raw version byte as it appears on the wire, signed bit included.
    pub version: u8,
    pub signature: Option<ExtrinsicSignature>,
    pub call: Call,
}

impl RawExtrinsic {
    pub fn unsigned(version: u8, call: Call) -> Self {
        Self {
            version: version & VERSION_MASK,
            signature: None,
            call,
        }
    }

    pub fn signed(version: u8, signature: ExtrinsicSignature, call: Call) -> Self {
        Self {
            version: (version & VERSION_MASK) | SIGNED_BIT,
            signature: Some(signature),
            call,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.version & SIGNED_BIT != 0
    }

    /// Envelope format version with the signed bit masked off.
    pub fn format_version(&self) -> u8 {
        self.version & VERSION_MASK
    }

    fn encode_body(&self, dest: &mut Vec<u8>) {
        dest.push(self.version);
        if let Some(signature) = &self.signature {
            signature.encode_to(dest);
        }
        self.call.call_index.encode_to(dest);
        dest.extend_from_slice(&self.call.args);
    }

    fn body_len(&self) -> usize {
        1 + self.signature.as_ref().map_or(0, |s| s.size_hint())
            + self.call.call_index.size_hint()
            + self.call.args.len()
    }
}

impl Encode for RawExtrinsic {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        let mut body = Vec::with_capacity(self.body_len());
        self.encode_body(&mut body);
        Compact(body.len() as u32).encode_to(dest);
        dest.extend_from_slice(&body);
    }

    fn size_hint(&self) -> usize {
        let body = self.body_len();
        compact_len(body as u128) + body
    }
}

impl Decode for RawExtrinsic {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let len = decode_length(cursor)?;
        let mut envelope = cursor.take(len)?;

        let version = envelope.read_byte()?;
        let signature = if version & SIGNED_BIT != 0 {
            Some(ExtrinsicSignature::decode(&mut envelope)?)
        } else {
            None
        };
        let call_index = CallIndex::decode(&mut envelope)?;
        let args = envelope.read_rest().to_vec();

        Ok(Self {
            version,
            signature,
            call: Call { call_index, args },
        })
    }
}

/// Error raised while turning opaque extrinsic bytes into envelopes.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("extrinsic {index}: invalid hex")]
    InvalidHex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("extrinsic {index}: invalid envelope")]
    Envelope {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// Ordered extrinsics of a block body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub extrinsics: Vec<RawExtrinsic>,
}

impl Block {
    pub fn new(extrinsics: Vec<RawExtrinsic>) -> Self {
        Self { extrinsics }
    }

    /// Build a block from opaque extrinsics, each including its length prefix
    /// (the form returned by `chain_getBlock`).
    pub fn from_opaque<B: AsRef<[u8]>>(opaque: &[B]) -> Result<Self, BlockError> {
        Self::from_opaque_with(opaque, DecodeOptions::default())
    }

    pub fn from_opaque_with<B: AsRef<[u8]>>(
        opaque: &[B],
        options: DecodeOptions,
    ) -> Result<Self, BlockError> {
        let extrinsics = opaque
            .iter()
            .enumerate()
            .map(|(index, bytes)| {
                decode_all_with::<RawExtrinsic>(bytes.as_ref(), options)
                    .map_err(|source| BlockError::Envelope { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { extrinsics })
    }

    /// Same as [`Block::from_opaque`] for `0x`-prefixed (or bare) hex strings.
    pub fn from_hex_strings<S: AsRef<str>>(hex_strings: &[S]) -> Result<Self, BlockError> {
        Self::from_hex_strings_with(hex_strings, DecodeOptions::default())
    }

    pub fn from_hex_strings_with<S: AsRef<str>>(
        hex_strings: &[S],
        options: DecodeOptions,
    ) -> Result<Self, BlockError> {
        let opaque = hex_strings
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                hex::decode(s.strip_prefix("0x").unwrap_or(s))
                    .map_err(|source| BlockError::InvalidHex { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_opaque_with(&opaque, options)
    }

    pub fn len(&self) -> usize {
        self.extrinsics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extrinsics.is_empty()
    }
}

impl Encode for Block {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        self.extrinsics.encode_to(dest);
    }
}

impl Decode for Block {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            extrinsics: Vec::<RawExtrinsic>::decode(cursor)?,
        })
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_strings = Vec::<String>::deserialize(deserializer)?;
        Block::from_hex_strings(&hex_strings).map_err(serde::de::Error::custom)
    }
}
