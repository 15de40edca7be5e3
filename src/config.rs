//! Command line and runtime configuration

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StreamError};

/// Log levels accepted by the subscriber filter.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Derive playback streams from a scene JSON document.
#[derive(Parser, Debug, Clone)]
#[command(name = "scene-streams")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scene JSON file to read. Reads stdin when absent or "-".
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file (TOML).
    #[arg(short, long, default_value = "scene-streams.toml")]
    pub config: PathBuf,

    /// Logging level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Whether the scene should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(p) => p.as_os_str() == "-",
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format (pretty, json)
    pub log_format: String,

    /// Pretty-print the JSON result
    pub pretty_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            pretty_output: true,
        }
    }
}

impl Config {
    /// Apply command line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if args.compact {
            self.pretty_output = false;
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(StreamError::Config(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        if self.log_format != "pretty" && self.log_format != "json" {
            return Err(StreamError::Config(format!(
                "log format must be pretty or json, not {}",
                self.log_format
            )));
        }
        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}
