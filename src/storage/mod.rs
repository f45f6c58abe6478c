//! Persistence for users, calculation submissions and industry benchmarks.
//!
//! The [`Storage`] trait is implemented by [`MemStorage`] (process-local,
//! seeded on construction) and [`PgStorage`] (PostgreSQL via `sqlx`, seeded
//! once per database). [`connect`] picks the backend from configuration.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::{BenchmarkSeed, StorageConfig};
use crate::error::EngineResult;
use crate::models::{
    Calculation, Industry, IndustryBenchmark, NewCalculation, NewIndustryBenchmark, NewUser, User,
};

pub use memory::MemStorage;
pub use postgres::PgStorage;

/// Operations every storage backend provides.
///
/// Records are returned as owned copies; callers never hold references into
/// backend state. Lookups that match nothing return `None` or an empty list.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;

    /// Fetches a user by id.
    async fn get_user(&self, id: i32) -> EngineResult<Option<User>>;

    /// Fetches a user by username.
    async fn get_user_by_username(&self, username: &str) -> EngineResult<Option<User>>;

    /// Creates a user; usernames are unique.
    async fn create_user(&self, user: NewUser) -> EngineResult<User>;

    /// Stores a calculation submission.
    async fn create_calculation(&self, calculation: NewCalculation) -> EngineResult<Calculation>;

    /// Returns the submissions of a session, oldest first.
    async fn get_calculations_by_session(&self, session_id: &str)
    -> EngineResult<Vec<Calculation>>;

    /// Returns benchmark rows in insertion order, optionally for one year.
    async fn get_industry_benchmarks(&self, year: Option<i32>)
    -> EngineResult<Vec<IndustryBenchmark>>;

    /// Fetches the benchmark row for an industry and year.
    async fn get_industry_benchmark(
        &self,
        industry: Industry,
        year: i32,
    ) -> EngineResult<Option<IndustryBenchmark>>;

    /// Creates a benchmark row; at most one row may exist per industry and year.
    async fn create_industry_benchmark(
        &self,
        benchmark: NewIndustryBenchmark,
    ) -> EngineResult<IndustryBenchmark>;
}

/// Shared handle to the configured backend.
pub type SharedStorage = Arc<dyn Storage>;

/// Builds the storage backend described by `config`.
///
/// With a database URL the PostgreSQL backend is tried first; if it cannot
/// be reached the service degrades to the in-memory backend instead of
/// failing.
pub async fn connect(config: &StorageConfig, seed: &BenchmarkSeed) -> SharedStorage {
    let Some(url) = config.database_url.as_deref() else {
        info!("No database configured, using in-memory storage");
        return Arc::new(MemStorage::new(seed));
    };

    match PgStorage::connect(url, config, seed).await {
        Ok(storage) => {
            info!("Connected to PostgreSQL storage");
            Arc::new(storage)
        }
        Err(err) => {
            warn!(error = %err, "PostgreSQL unavailable, falling back to in-memory storage");
            Arc::new(MemStorage::new(seed))
        }
    }
}
