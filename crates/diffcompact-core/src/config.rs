//! Compactor configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and the `DIFFCOMPACT_CONTEXT_LENGTH` environment
//! variable.
//!
//! ```toml
//! context_length = 5
//! message_prefix = "snapshot mismatch"
//! ```

use crate::compactor::ComparisonCompactor;
use crate::errors::{DiffCompactError, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding [`CompactorConfig::context_length`].
pub const ENV_CONTEXT_LENGTH: &str = "DIFFCOMPACT_CONTEXT_LENGTH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompactorConfig {
    /// Characters of unchanged context kept on each side of a difference
    pub context_length: usize,
    /// Message placed in front of every failure, if set
    pub message_prefix: Option<String>,
}

impl Default for CompactorConfig {
    fn default() -> Self {
        Self {
            context_length: ComparisonCompactor::DEFAULT_CONTEXT_LENGTH,
            message_prefix: None,
        }
    }
}

impl CompactorConfig {
    /// Parse configuration from TOML text.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — text is not valid TOML, holds an unknown key, or
    ///   `context_length` is not a non-negative integer
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DiffCompactError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML configuration file.
    ///
    /// # Errors
    ///
    /// - `Io` — the file cannot be read
    /// - `InvalidConfig` — see [`CompactorConfig::from_toml_str`]
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DiffCompactError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            context_length = config.context_length,
            "loaded compactor config"
        );
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` — `DIFFCOMPACT_CONTEXT_LENGTH` is set but is not a
    ///   non-negative integer
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`CompactorConfig::with_env_overrides`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CONTEXT_LENGTH) {
            self.context_length = raw.trim().parse().map_err(|_| {
                DiffCompactError::InvalidConfig {
                    reason: format!(
                        "{} must be a non-negative integer, got {:?}",
                        ENV_CONTEXT_LENGTH, raw
                    ),
                }
            })?;
        }
        Ok(self)
    }

    /// Build a compactor using this configuration's context length.
    pub fn compactor(&self) -> ComparisonCompactor {
        ComparisonCompactor::new(self.context_length)
    }
}
