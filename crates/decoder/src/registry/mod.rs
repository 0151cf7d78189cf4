// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call registry: resolves a [`CallIndex`] to the descriptor that decodes its
//! arguments.
//!
//! A registry is built once per metadata version by whoever loads the
//! metadata, then shared read-only (usually behind an `Arc`) by every parse.
//! There is no mutation API after construction.

mod descriptor;

pub use descriptor::{FieldDescriptor, FieldType, TypeDescriptor, VariantDescriptor};

use crate::types::CallIndex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("call index {call_index} registered twice ({first} and {second})")]
    DuplicateCallIndex {
        call_index: CallIndex,
        first: String,
        second: String,
    },

    #[error("invalid registry JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to read registry file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One registry entry in JSON form:
/// `{"callIndex": [section, method], "name": "...", "fields": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RegistryEntry {
    call_index: [u8; 2],
    name: String,
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, Default)]
pub struct CallRegistry {
    calls: HashMap<CallIndex, TypeDescriptor>,
}

impl CallRegistry {
    /// Build a registry, rejecting any call index that appears more than once.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (CallIndex, TypeDescriptor)>,
    {
        let entries = entries.into_iter();
        let mut calls: HashMap<CallIndex, TypeDescriptor> = HashMap::with_capacity(entries.size_hint().0);
        for (call_index, descriptor) in entries {
            if let Some(existing) = calls.get(&call_index) {
                return Err(RegistryError::DuplicateCallIndex {
                    call_index,
                    first: existing.name.clone(),
                    second: descriptor.name,
                });
            }
            calls.insert(call_index, descriptor);
        }
        tracing::debug!(calls = calls.len(), "built call registry");
        Ok(Self { calls })
    }

    /// Load a registry from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries.into_iter().map(|entry| {
            let [section, method] = entry.call_index;
            (
                CallIndex::new(section, method),
                TypeDescriptor::new(entry.name, entry.fields),
            )
        }))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn lookup(&self, call_index: CallIndex) -> Option<&TypeDescriptor> {
        self.calls.get(&call_index)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Registered calls in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (CallIndex, &TypeDescriptor)> {
        self.calls.iter().map(|(index, descriptor)| (*index, descriptor))
    }
}
