// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::codec::{ByteCursor, Decode, DecodeError, Encode};
use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies a dispatchable call: the pallet (section) index followed by
/// the call (method) index within that pallet. Two raw bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallIndex {
    pub section: u8,
    pub method: u8,
}

impl CallIndex {
    pub const fn new(section: u8, method: u8) -> Self {
        Self { section, method }
    }
}

impl From<(u8, u8)> for CallIndex {
    fn from((section, method): (u8, u8)) -> Self {
        Self::new(section, method)
    }
}

impl Encode for CallIndex {
    fn encode_to(&self, dest: &mut Vec<u8>) {
        dest.push(self.section);
        dest.push(self.method);
    }

    fn size_hint(&self) -> usize {
        2
    }
}

impl Decode for CallIndex {
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        let [section, method] = cursor.read_array()?;
        Ok(Self { section, method })
    }
}

/// Format: "0x" followed by the two bytes in hex, e.g. `0x0001`
impl fmt::Display for CallIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}", self.section, self.method)
    }
}

impl Serialize for CallIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
