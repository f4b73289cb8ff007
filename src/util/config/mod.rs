//! Run configuration
//!
//! The binary always runs with [`RunConfig::default`]; the TOML form exists
//! for library callers that want to drive [`crate::run`] with other values.
//!
//! ```rust
//! use fibseq::util::config::RunConfig;
//!
//! let config = RunConfig::from_toml_str("count = 5").unwrap();
//! assert_eq!(config.count, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::util::logger::LogLevel;

/// Number of terms the entry point prints
pub const DEFAULT_COUNT: i64 = 10;

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of Fibonacci terms to generate
    #[serde(default = "default_count")]
    pub count: i64,
    /// Minimum level of log events written to stderr
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            log_level: LogLevel::default(),
        }
    }
}

impl RunConfig {
    /// Parse a configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::ParseError)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }

    /// Raise logging to DEBUG when `verbose` is set
    pub fn with_verbose(
        mut self,
        verbose: bool,
    ) -> Self {
        if verbose {
            self.log_level = LogLevel::Debug;
        }
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    ParseError(#[source] toml::de::Error),
    #[error("Config serialize error: {0}")]
    SerializeError(#[source] toml::ser::Error),
}
