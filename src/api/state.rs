//! Application state for the Pay Raise Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::benchmark::BenchmarkLookup;
use crate::config::ConfigLoader;
use crate::storage::SharedStorage;

/// Shared application state.
///
/// Holds the loaded configuration and the storage backend chosen at
/// startup. Cloning is cheap; every clone refers to the same backend.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    storage: SharedStorage,
    benchmarks: BenchmarkLookup,
}

impl AppState {
    /// Creates a new application state from a configuration and a storage backend.
    pub fn new(config: ConfigLoader, storage: SharedStorage) -> Self {
        let benchmarks = BenchmarkLookup::new(storage.clone(), config.calculator().inflation_rate)
            .with_default_year(config.benchmarks().year);
        Self {
            config: Arc::new(config),
            storage,
            benchmarks,
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    /// Returns the benchmark lookup.
    pub fn benchmarks(&self) -> &BenchmarkLookup {
        &self.benchmarks
    }
}
