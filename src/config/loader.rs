//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and applying environment overrides.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, BenchmarkSeed, CalculatorSettings, EconomicDataConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "PAYRAISE_CONFIG";

/// Environment variable overriding the database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable overriding the bind address.
pub const BIND_ADDRESS_ENV: &str = "PAYRAISE_BIND";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config/payraise.yaml";

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:5000"
/// storage:
///   database_url: "postgres://localhost/payraise"
/// calculator:
///   inflation_rate: "3.1"
///   tax_brackets:
///     - { up_to: "20000", rate: "10" }
///     - { rate: "35" }
/// benchmarks:
///   year: 2025
///   industries: [...]
/// ```
///
/// Every section is optional.
///
/// # Example
///
/// ```no_run
/// use payraise_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payraise.yaml")?;
/// println!("Inflation: {}%", loader.calculator().inflation_rate);
/// # Ok::<(), payraise_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The calculator or benchmark sections are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AppConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::from_config(config).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Loads configuration from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(&path) {
            Err(EngineError::ConfigNotFound { path }) => {
                info!(path = %path, "Configuration file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration the way the server binary does: file from
    /// [`CONFIG_PATH_ENV`] (or [`DEFAULT_CONFIG_PATH`]) plus environment overrides.
    pub fn from_env() -> EngineResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut loader = Self::load_or_default(path)?;
        loader.apply_env(|name| std::env::var(name).ok());
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AppConfig) -> EngineResult<Self> {
        config
            .calculator
            .validate()
            .and_then(|_| config.benchmarks.validate())
            .map_err(|message| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message,
            })?;
        Ok(Self { config })
    }

    /// Applies overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.config.storage.database_url = Some(url);
        }
        if let Some(bind) = lookup(BIND_ADDRESS_ENV).filter(|v| !v.trim().is_empty()) {
            self.config.server.bind_address = bind;
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the calculation constants.
    pub fn calculator(&self) -> &CalculatorSettings {
        &self.config.calculator
    }

    /// Returns the benchmark seed dataset.
    pub fn benchmarks(&self) -> &BenchmarkSeed {
        &self.config.benchmarks
    }

    /// Returns the economic reference data.
    pub fn economic(&self) -> &EconomicDataConfig {
        &self.config.economic
    }
}
