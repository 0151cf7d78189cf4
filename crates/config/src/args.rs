// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.lenient)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Call registry JSON: an array of {"callIndex", "name", "fields"} entries
    #[arg(short, long)]
    pub registry: PathBuf,

    /// Block JSON: an array of hex-encoded opaque extrinsics
    #[arg(short, long)]
    pub block: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load `env_file` into the process environment if it exists.
    ///
    /// Returns whether a file was loaded. Variables already set in the
    /// environment take precedence over the file.
    pub fn load_env_file(&self) -> Result<bool, ConfigError> {
        load_env_file(&self.env_file)
    }
}

pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }
    dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}
