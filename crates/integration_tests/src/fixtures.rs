// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use scale_extrinsic_decoder::{Block, CallRegistry};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl Default for FixtureLoader {
    /// Loader rooted at this crate's `fixtures/` directory.
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
    }
}

impl FixtureLoader {
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        if path.as_ref().is_absolute() {
            path.as_ref().to_path_buf()
        } else {
            self.fixtures_dir.join(path.as_ref())
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path);
        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read fixture file: {:?}", full_path))?;

        let json: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse JSON fixture: {:?}", full_path))?;

        Ok(json)
    }

    /// Load a call registry fixture.
    pub fn load_registry(&self, path: impl AsRef<Path>) -> Result<CallRegistry> {
        let full_path = self.resolve(path);
        CallRegistry::from_json_file(&full_path)
            .context(format!("Failed to load registry fixture: {:?}", full_path))
    }

    /// Load a block fixture: a JSON array of hex-encoded opaque extrinsics.
    pub fn load_block(&self, path: impl AsRef<Path>) -> Result<Block> {
        let full_path = self.resolve(path);
        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read block fixture: {:?}", full_path))?;
        let block: Block = serde_json::from_str(&content)
            .context(format!("Failed to decode block fixture: {:?}", full_path))?;
        Ok(block)
    }

    /// Raw bytes of each extrinsic in a block fixture, length prefix included.
    pub fn load_opaque(&self, path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
        let json = self.load(path)?;
        let items = json
            .as_array()
            .context("Block fixture is not a JSON array")?;
        items
            .iter()
            .map(|item| {
                let hex_str = item.as_str().context("Block entry is not a string")?;
                let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
                hex::decode(stripped).context(format!("Invalid hex in block entry: {}", hex_str))
            })
            .collect()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).exists()
    }

    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }
}
