// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod fixtures;
pub mod utils;

pub use fixtures::FixtureLoader;
pub use utils::*;

/// Fixture file names shared by the test binaries.
pub mod constants {
    pub const TEST_REGISTRY: &str = "registry/test_calls.json";
    pub const MIXED_BLOCK: &str = "blocks/mixed_block.json";
    pub const MIXED_BLOCK_EXPECTED: &str = "expected/mixed_block.json";
}
