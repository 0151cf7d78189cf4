// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use scale_extrinsic_decoder::{
    Block, CallRegistry, ExtrinsicParser, ParserOptions, TrailingBytesPolicy,
    codec::{CompactPolicy, DecodeOptions},
    logging::{self, LoggingConfig},
};
use scale_extrinsic_decoder_config::{Args, CompactMode, DecoderConfig, TrailingBytesMode};
use std::sync::Arc;

fn parser_options(config: &DecoderConfig) -> ParserOptions {
    ParserOptions {
        decode: DecodeOptions {
            compact: match config.codec.compact {
                CompactMode::Canonical => CompactPolicy::Canonical,
                CompactMode::Lenient => CompactPolicy::Lenient,
            },
        },
        trailing_bytes: match config.codec.trailing_bytes {
            TrailingBytesMode::Ignore => TrailingBytesPolicy::Ignore,
            TrailingBytesMode::Reject => TrailingBytesPolicy::Reject,
        },
        max_extrinsics: config.parser.extrinsic_limit(),
    }
}

fn load_block(args: &Args, options: &ParserOptions) -> anyhow::Result<Block> {
    let json = std::fs::read_to_string(&args.block)
        .with_context(|| format!("failed to read block file {}", args.block.display()))?;
    let hex_strings: Vec<String> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a JSON array of hex strings", args.block.display()))?;
    Ok(Block::from_hex_strings_with(&hex_strings, options.decode)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let env_loaded = args.load_env_file()?;
    let config = DecoderConfig::from_env()?;

    let _log_guard = logging::init_with_config(LoggingConfig {
        level: &config.log.level,
        json_format: config.log.json,
        strip_ansi: config.log.strip_ansi,
        write_to_file: config.log.write,
        write_path: &config.log.write_path,
        write_max_file_size: config.log.write_max_file_size,
        write_max_files: config.log.write_max_files,
    })?;
    if env_loaded {
        tracing::info!("Loaded environment from {}", args.env_file);
    }

    let registry = Arc::new(
        CallRegistry::from_json_file(&args.registry)
            .with_context(|| format!("failed to load registry {}", args.registry.display()))?,
    );
    tracing::info!("Registry: {} calls", registry.len());

    let options = parser_options(&config);
    let block = load_block(&args, &options)?;
    tracing::info!("Block: {} extrinsics", block.len());

    let parser = ExtrinsicParser::new(options);
    let extrinsics = if config.parser.max_concurrency > 1 {
        parser
            .parse_extrinsics_concurrent(registry, block, config.parser.max_concurrency)
            .await?
    } else {
        parser.parse_extrinsics(&registry, &block)?
    };

    println!("{}", serde_json::to_string_pretty(&extrinsics)?);
    Ok(())
}
