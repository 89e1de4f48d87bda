//! Optional configuration file
//!
//! A JSON object; every field is optional. Switches set here are OR-ed
//! into every description compiled with this configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether descriptions may request orphan index cleanup (default: true)
    #[serde(default = "default_allow_unsafe_drop")]
    pub allow_unsafe_drop_orphan_indices: bool,

    /// Force-skip triggers for every description
    #[serde(default)]
    pub skip_triggers: bool,

    /// Force-skip indices for every description
    #[serde(default)]
    pub skip_indices: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_allow_unsafe_drop() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            allow_unsafe_drop_orphan_indices: default_allow_unsafe_drop(),
            skip_triggers: false,
            skip_indices: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration content
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.severity().map(|_| ())
    }

    /// Configured log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(CliError::config_error)
    }
}
