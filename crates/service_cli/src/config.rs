//! CLI configuration management.
//!
//! Handles loading of `isearch.toml` with environment variable override
//! support. A missing file is not an error: the defaults apply.
//!
//! ```toml
//! log_level = "info"
//!
//! [search]
//! strategy = "hybrid"
//! stall_limit = 3
//! ```

use std::path::Path;

use search_core::search::{SearchConfig, SearchStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,

    /// Engine settings used by every command unless overridden by a flag
    pub search: SearchConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            search: SearchConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Reads `ISEARCH_STRATEGY`, `ISEARCH_STALL_LIMIT` and `ISEARCH_LOG_LEVEL`.
    /// Values that do not parse are reported as `ConfigError::Validation`.
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(strategy) = std::env::var("ISEARCH_STRATEGY") {
            self.search.strategy = strategy
                .parse::<SearchStrategy>()
                .map_err(|e| ConfigError::Validation(vec![e.to_string()]))?;
        }

        if let Ok(stall_limit) = std::env::var("ISEARCH_STALL_LIMIT") {
            self.search.stall_limit = stall_limit.parse().map_err(|_| {
                ConfigError::Validation(vec![format!(
                    "ISEARCH_STALL_LIMIT '{}' is not a non-negative integer",
                    stall_limit
                )])
            })?;
        }

        if let Ok(log_level) = std::env::var("ISEARCH_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if let Err(e) = self.search.validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Render the configuration in the same TOML layout it is loaded from
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration could not be rendered as TOML
    #[error("Render error: {0}")]
    Render(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
