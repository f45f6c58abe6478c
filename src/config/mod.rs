//! Configuration loading and management for the Pay Raise Engine.
//!
//! This module loads the service configuration from a YAML file: server and
//! storage settings, the calculation constants (reference inflation rate,
//! tax brackets, projection horizon) and the benchmark seed dataset.
//!
//! # Example
//!
//! ```no_run
//! use payraise_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payraise.yaml").unwrap();
//! println!("Benchmarks seeded for {}", config.benchmarks().year);
//! ```

mod loader;
mod types;

pub use loader::{
    BIND_ADDRESS_ENV, CONFIG_PATH_ENV, ConfigLoader, DATABASE_URL_ENV, DEFAULT_CONFIG_PATH,
};
pub use types::{
    AppConfig, BenchmarkSeed, BenchmarkSeedRow, CalculatorSettings, EconomicDataConfig,
    ServerConfig, StorageConfig, TaxBracket,
};
