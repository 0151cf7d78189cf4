// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

/// How compact integers that are not minimally encoded are treated
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompactMode {
    #[default]
    Canonical,
    Lenient,
}

/// How call argument bytes left after the last registered field are treated
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBytesMode {
    #[default]
    Ignore,
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct CodecConfig {
    /// Compact integer policy
    ///
    /// Env: SXD_CODEC_COMPACT
    /// Valid values: canonical, lenient
    /// Default: canonical
    pub compact: CompactMode,

    /// Unread call argument bytes policy
    ///
    /// Env: SXD_CODEC_TRAILING_BYTES
    /// Valid values: ignore, reject
    /// Default: ignore
    pub trailing_bytes: TrailingBytesMode,
}
