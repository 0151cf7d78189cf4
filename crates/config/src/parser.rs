// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Upper bound for `max_concurrency`; decoding is CPU-bound.
pub const MAX_CONCURRENCY_LIMIT: usize = 256;

#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum number of extrinsics accepted in one block, 0 for no limit
    ///
    /// Env: SXD_PARSER_MAX_EXTRINSICS
    /// Default: 0
    pub max_extrinsics: usize,

    /// Number of extrinsics decoded in parallel, 1 decodes sequentially
    ///
    /// Env: SXD_PARSER_MAX_CONCURRENCY
    /// Valid values: 1..=256
    /// Default: 4
    pub max_concurrency: usize,
}

pub(crate) fn default_max_concurrency() -> usize {
    4
}

impl ParserConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 || self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(ConfigError::ValidateError(format!(
                "Parser max concurrency must be between 1 and {}, got {}",
                MAX_CONCURRENCY_LIMIT, self.max_concurrency
            )));
        }
        Ok(())
    }

    /// `None` when the batch size is unbounded.
    pub fn extrinsic_limit(&self) -> Option<usize> {
        (self.max_extrinsics > 0).then_some(self.max_extrinsics)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_extrinsics: 0,
            max_concurrency: default_max_concurrency(),
        }
    }
}
