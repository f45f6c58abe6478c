//! In-memory storage backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::Storage;
use crate::config::BenchmarkSeed;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Calculation, Industry, IndustryBenchmark, NewCalculation, NewIndustryBenchmark, NewUser, User,
};

#[derive(Debug)]
struct MemState {
    users: BTreeMap<i32, User>,
    calculations: BTreeMap<i32, Calculation>,
    benchmarks: BTreeMap<i32, IndustryBenchmark>,
    next_user_id: i32,
    next_calculation_id: i32,
    next_benchmark_id: i32,
}

impl MemState {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            calculations: BTreeMap::new(),
            benchmarks: BTreeMap::new(),
            next_user_id: 1,
            next_calculation_id: 1,
            next_benchmark_id: 1,
        }
    }

    fn insert_benchmark(&mut self, row: NewIndustryBenchmark) -> EngineResult<IndustryBenchmark> {
        let exists = self
            .benchmarks
            .values()
            .any(|b| b.industry == row.industry && b.year == row.year);
        if exists {
            return Err(EngineError::DuplicateBenchmark {
                industry: row.industry.to_string(),
                year: row.year,
            });
        }

        let id = self.next_benchmark_id;
        self.next_benchmark_id += 1;
        let benchmark = row.into_benchmark(id, Utc::now());
        self.benchmarks.insert(id, benchmark.clone());
        Ok(benchmark)
    }
}

/// Process-local storage.
///
/// State lives behind a mutex so a single instance can be shared between
/// request handlers on a multi-threaded runtime. Nothing survives a restart.
#[derive(Debug)]
pub struct MemStorage {
    state: Mutex<MemState>,
}

impl MemStorage {
    /// Creates an empty store and seeds it with the benchmark dataset.
    pub fn new(seed: &BenchmarkSeed) -> Self {
        let mut state = MemState::new();
        for row in seed.rows() {
            if let Err(err) = state.insert_benchmark(row) {
                warn!(error = %err, "Skipping benchmark seed row");
            }
        }
        debug!(rows = state.benchmarks.len(), "Seeded in-memory benchmarks");

        Self {
            state: Mutex::new(state),
        }
    }

    /// Creates a store with no benchmark rows.
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(MemState::new()),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_user(&self, id: i32) -> EngineResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> EngineResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> EngineResult<User> {
        let mut state = self.state.lock().await;
        if state.users.values().any(|u| u.username == user.username) {
            return Err(EngineError::DuplicateUsername {
                username: user.username,
            });
        }

        let id = state.next_user_id;
        state.next_user_id += 1;
        let user = user.into_user(id);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn create_calculation(&self, calculation: NewCalculation) -> EngineResult<Calculation> {
        let mut state = self.state.lock().await;
        let id = state.next_calculation_id;
        state.next_calculation_id += 1;
        let calculation = calculation.into_calculation(id, Utc::now());
        state.calculations.insert(id, calculation.clone());
        Ok(calculation)
    }

    async fn get_calculations_by_session(
        &self,
        session_id: &str,
    ) -> EngineResult<Vec<Calculation>> {
        let state = self.state.lock().await;
        let mut matches: Vec<Calculation> = state
            .calculations
            .values()
            .filter(|c| c.session_id.as_deref() == Some(session_id))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn get_industry_benchmarks(
        &self,
        year: Option<i32>,
    ) -> EngineResult<Vec<IndustryBenchmark>> {
        let state = self.state.lock().await;
        Ok(state
            .benchmarks
            .values()
            .filter(|b| year.is_none_or(|y| b.year == y))
            .cloned()
            .collect())
    }

    async fn get_industry_benchmark(
        &self,
        industry: Industry,
        year: i32,
    ) -> EngineResult<Option<IndustryBenchmark>> {
        let state = self.state.lock().await;
        Ok(state
            .benchmarks
            .values()
            .find(|b| b.industry == industry && b.year == year)
            .cloned())
    }

    async fn create_industry_benchmark(
        &self,
        benchmark: NewIndustryBenchmark,
    ) -> EngineResult<IndustryBenchmark> {
        self.state.lock().await.insert_benchmark(benchmark)
    }
}
