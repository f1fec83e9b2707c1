//! Configuration management for abigrab
//!
//! Settings are loaded from environment variables with fixed defaults, then
//! optionally overridden by command-line arguments. Once resolved at startup
//! the configuration is never mutated during a run.
//!
//! # Environment Variables
//!
//! - `ABIGRAB_INPUT_DIR`: build artifact tree to scan - default: "../../out/"
//! - `ABIGRAB_OUTPUT_DIR`: where ABI files are written - default: "../../abis/"
//! - `ABIGRAB_LOG_LEVEL`: logging level - default: "info"
//!
//! The default directories are the conventional locations relative to a
//! contract repository's scripts directory; pass explicit paths to run the
//! tool from anywhere else.

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Default values for configuration
const DEFAULT_INPUT_DIR: &str = "../../out/";
const DEFAULT_OUTPUT_DIR: &str = "../../abis/";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Resolved configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Build artifact tree to scan recursively
    pub input_dir: PathBuf,

    /// Directory the ABI files are written into (created if missing)
    pub output_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    /// Loads configuration from environment variables with fixed defaults.
    fn default() -> Self {
        let input_dir = env::var("ABIGRAB_INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_DIR));

        let output_dir = env::var("ABIGRAB_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_level = env::var("ABIGRAB_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            input_dir,
            output_dir,
            log_level,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a directory is empty or the log level is not
    /// one of trace, debug, info, warn, error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Input directory must not be empty".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output directory must not be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Abigrab Configuration:")?;
        writeln!(f, "  Input Dir: {}", self.input_dir.display())?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
