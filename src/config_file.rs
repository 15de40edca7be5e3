//! Configuration file support
//!
//! Loads runtime configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, StreamError};

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Output settings
    pub output: Option<OutputSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print the JSON result
    pub pretty: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| StreamError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StreamError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            logging: Some(LoggingSettings {
                level: Some("info".to_string()),
                format: Some("pretty".to_string()),
            }),
            output: Some(OutputSettings { pretty: Some(true) }),
        }
    }

    /// Convert to Config
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (
                l.level.unwrap_or(defaults.log_level),
                l.format.unwrap_or(defaults.log_format),
            ),
            None => (defaults.log_level, defaults.log_format),
        };
        Config {
            log_level,
            log_format,
            pretty_output: self
                .output
                .and_then(|o| o.pretty)
                .unwrap_or(defaults.pretty_output),
        }
    }
}
