// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod codec;
mod error;
mod log;
mod parser;

pub use args::{Args, load_env_file};
pub use codec::{CodecConfig, CompactMode, TrailingBytesMode};
pub use error::ConfigError;
pub use log::LogConfig;
pub use parser::{MAX_CONCURRENCY_LIMIT, ParserConfig};

use serde::Deserialize;

/// Environment variables as read by envy (after stripping the `SXD_` prefix).
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default)]
    codec_compact: CompactMode,
    #[serde(default)]
    codec_trailing_bytes: TrailingBytesMode,

    #[serde(default)]
    parser_max_extrinsics: usize,
    #[serde(default = "parser::default_max_concurrency")]
    parser_max_concurrency: usize,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,
}

impl From<EnvConfig> for DecoderConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            codec: CodecConfig {
                compact: env.codec_compact,
                trailing_bytes: env.codec_trailing_bytes,
            },
            parser: ParserConfig {
                max_extrinsics: env.parser_max_extrinsics,
                max_concurrency: env.parser_max_concurrency,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
        }
    }
}

pub const ENV_PREFIX: &str = "SXD_";

#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub codec: CodecConfig,
    pub parser: ParserConfig,
    pub log: LogConfig,
}

impl DecoderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        Self::from_env_config(env)
    }

    /// Load from explicit `(name, value)` pairs instead of the process
    /// environment. Names carry the `SXD_` prefix.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        Self::from_env_config(env)
    }

    fn from_env_config(env: EnvConfig) -> Result<Self, ConfigError> {
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.parser.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
