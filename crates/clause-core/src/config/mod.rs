//! Configuration loaded from TOML. Every section falls back to defaults.

mod analysis_config;
pub mod defaults;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use analysis_config::AnalysisConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ClauseResult, ConfigError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseConfig {
    pub analysis: AnalysisConfig,
    pub observability: ObservabilityConfig,
}

impl ClauseConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> ClauseResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> ClauseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            },
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make analysis meaningless.
    pub fn validate(&self) -> ClauseResult<()> {
        if self.analysis.max_contradictions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_contradictions".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.analysis.max_phrases_per_document == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_phrases_per_document".to_string(),
                message: "must be at least 1 when set".to_string(),
            }
            .into());
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", self.observability.log_level),
            }
            .into());
        }
        Ok(())
    }
}
