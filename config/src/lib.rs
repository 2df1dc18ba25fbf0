//! # Configuration Management for QueryHaus
//!
//! This crate provides the configuration structures that seed query builder
//! defaults: identifier quoting and limit policies.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::BuilderConfig;
//!
//! // Quote SELECT/FROM identifiers, page 50 rows by default, never more than 500
//! let builder_config = BuilderConfig::new(true, 50, 500);
//! assert!(builder_config.quote_identifiers);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [builder]
//! quote_identifiers = false
//! default_limit = 0
//! max_limit = 0
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from queryhaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./queryhaus.toml";
const CONFIG_PATH_VAR: &str = "QUERYHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Query builder defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Wrap SELECT columns and the FROM target in double quotes
    pub quote_identifiers: bool,
    /// LIMIT applied to freshly configured builders (0 = none)
    pub default_limit: u64,
    /// Upper bound enforced by checked rendering (0 = unbounded)
    pub max_limit: u64,
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment or the default path
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            // A missing .env is fine, a malformed one is not
            match dotenvy::dotenv() {
                Ok(_) => {}
                Err(err) if err.not_found() => {}
                Err(err) => return Err(err.into()),
            }

            match Self::config_path()? {
                Some(config_path) => Self::from_file(&config_path),
                None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                    Self::from_file(DEFAULT_CONFIG_PATH)
                }
                None => Err(ConfigError::Invalid(format!(
                    "Config path must be specified in .env file as {} or in {} file",
                    CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
                ))),
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Path named by `QUERYHAUS_CONFIG`; unset is `None`, non-Unicode is an error
    fn config_path() -> Result<Option<String>, ConfigError> {
        Self::path_from_var(env::var(CONFIG_PATH_VAR))
    }

    fn path_from_var(value: Result<String, env::VarError>) -> Result<Option<String>, ConfigError> {
        match value {
            Ok(path) => Ok(Some(path)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.builder.validate()
    }
}

impl BuilderConfig {
    /// Create a new builder configuration
    pub fn new(quote_identifiers: bool, default_limit: u64, max_limit: u64) -> Self {
        Self {
            quote_identifiers,
            default_limit,
            max_limit,
        }
    }

    /// Validate builder values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit > 0 && self.default_limit > self.max_limit {
            return Err(ConfigError::Invalid(format!(
                "Builder default_limit ({}) cannot be greater than max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }

        Ok(())
    }

    /// Whether `limit` is allowed under `max_limit`
    pub fn allows_limit(&self, limit: u64) -> bool {
        self.max_limit == 0 || limit <= self.max_limit
    }
}
