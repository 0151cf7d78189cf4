// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! SCALE codec and metadata-driven extrinsic decoder.
//!
//! - [`codec`]: primitive encode/decode over a [`codec::ByteCursor`].
//! - [`types`]: fixed-shape domain types (call index, signature block, era,
//!   XCM v0 junctions) and the raw block/extrinsic envelope.
//! - [`registry`]: call index to field layout lookup, loadable from JSON.
//! - [`parser`]: decodes a block's extrinsics against a registry.

pub mod codec;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod types;
pub mod utils;
pub mod value;

pub use parser::{Extrinsic, ExtrinsicParser, ParseError, ParserOptions, TrailingBytesPolicy};
pub use registry::CallRegistry;
pub use types::Block;
