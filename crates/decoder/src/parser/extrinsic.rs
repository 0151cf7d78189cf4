// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::{CallIndex, ExtrinsicSignature, SIGNED_BIT};
use crate::value::{DecodedValue, FieldMap};
use serde::{Serialize, Serializer};

/// Decoded call arguments in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFields(Vec<(String, DecodedValue)>);

impl CallFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, name: String, value: DecodedValue) {
        self.0.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl From<Vec<(String, DecodedValue)>> for CallFields {
    fn from(fields: Vec<(String, DecodedValue)>) -> Self {
        Self(fields)
    }
}

impl Serialize for CallFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FieldMap(&self.0).serialize(serializer)
    }
}

/// A fully decoded extrinsic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extrinsic {
    /// Call name from the registry.
    pub name: String,
    /// Raw version byte, signed bit included.
    pub version: u8,
    /// Null for unsigned extrinsics (inherents).
    pub signature: Option<ExtrinsicSignature>,
    pub call_index: CallIndex,
    pub call_fields: CallFields,
}

impl Extrinsic {
    pub fn is_signed(&self) -> bool {
        self.version & SIGNED_BIT != 0
    }
}
