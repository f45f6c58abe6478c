//! PostgreSQL storage backend.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{debug, info, warn};

use super::Storage;
use crate::config::{BenchmarkSeed, StorageConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Calculation, Industry, IndustryBenchmark, NewCalculation, NewIndustryBenchmark, NewUser, User,
};

/// Advisory lock key serializing benchmark seeding across processes.
const SEED_LOCK_KEY: i64 = 0x5041_5952_4149_5345;

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS calculations (
        id SERIAL PRIMARY KEY,
        current_salary NUMERIC(12, 2) NOT NULL,
        raise_percentage NUMERIC(5, 2),
        raise_amount NUMERIC(12, 2),
        target_salary NUMERIC(12, 2),
        pay_period TEXT NOT NULL DEFAULT 'annual',
        include_inflation BOOLEAN,
        include_taxes BOOLEAN,
        industry TEXT,
        location TEXT,
        session_id TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS calculations_session_id_idx ON calculations (session_id)",
    "CREATE TABLE IF NOT EXISTS industry_benchmarks (
        id SERIAL PRIMARY KEY,
        industry TEXT NOT NULL,
        average_raise NUMERIC(5, 2) NOT NULL,
        median_raise NUMERIC(5, 2) NOT NULL,
        top_quartile_raise NUMERIC(5, 2) NOT NULL,
        year INTEGER NOT NULL,
        last_updated TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
];

const CALCULATION_COLUMNS: &str = "id, current_salary, raise_percentage, raise_amount, \
    target_salary, pay_period, include_inflation, include_taxes, industry, location, \
    session_id, created_at";

const BENCHMARK_COLUMNS: &str =
    "id, industry, average_raise, median_raise, top_quartile_raise, year, last_updated";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
        }
    }
}

#[derive(Debug, FromRow)]
struct CalculationRow {
    id: i32,
    current_salary: Decimal,
    raise_percentage: Option<Decimal>,
    raise_amount: Option<Decimal>,
    target_salary: Option<Decimal>,
    pay_period: String,
    include_inflation: Option<bool>,
    include_taxes: Option<bool>,
    industry: Option<String>,
    location: Option<String>,
    session_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CalculationRow> for Calculation {
    type Error = EngineError;

    fn try_from(row: CalculationRow) -> Result<Self, Self::Error> {
        let pay_period = row.pay_period.parse().map_err(|_| EngineError::Storage {
            message: format!(
                "calculation {} has unknown pay period '{}'",
                row.id, row.pay_period
            ),
        })?;

        Ok(Calculation {
            id: row.id,
            current_salary: row.current_salary,
            raise_percentage: row.raise_percentage,
            raise_amount: row.raise_amount,
            target_salary: row.target_salary,
            pay_period,
            include_inflation: row.include_inflation,
            include_taxes: row.include_taxes,
            industry: row.industry,
            location: row.location,
            session_id: row.session_id,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct BenchmarkRow {
    id: i32,
    industry: String,
    average_raise: Decimal,
    median_raise: Decimal,
    top_quartile_raise: Decimal,
    year: i32,
    last_updated: DateTime<Utc>,
}

impl TryFrom<BenchmarkRow> for IndustryBenchmark {
    type Error = EngineError;

    fn try_from(row: BenchmarkRow) -> Result<Self, Self::Error> {
        let industry = row.industry.parse().map_err(|_| EngineError::Storage {
            message: format!(
                "benchmark {} has unknown industry '{}'",
                row.id, row.industry
            ),
        })?;

        Ok(IndustryBenchmark {
            id: row.id,
            industry,
            average_raise: row.average_raise,
            median_raise: row.median_raise,
            top_quartile_raise: row.top_quartile_raise,
            year: row.year,
            last_updated: row.last_updated,
        })
    }
}

/// Storage backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects to `url`, creates missing tables and seeds benchmarks.
    ///
    /// Connection and schema errors are returned. Seeding is best-effort:
    /// a failure is logged and the store is still returned.
    pub async fn connect(
        url: &str,
        config: &StorageConfig,
        seed: &BenchmarkSeed,
    ) -> EngineResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(url)
            .await
            .map_err(|err| EngineError::BackendUnavailable {
                message: err.to_string(),
            })?;

        Self::from_pool(pool, seed).await
    }

    /// Wraps an existing pool, creating missing tables and seeding benchmarks.
    pub async fn from_pool(pool: PgPool, seed: &BenchmarkSeed) -> EngineResult<Self> {
        let storage = Self { pool };
        storage.ensure_schema().await?;

        match storage.seed_benchmarks(seed).await {
            Ok(0) => debug!("Benchmarks already present, skipping seed"),
            Ok(rows) => info!(rows, "Seeded industry benchmarks"),
            Err(err) => warn!(error = %err, "Failed to seed industry benchmarks"),
        }

        Ok(storage)
    }

    async fn ensure_schema(&self) -> EngineResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Inserts the seed rows if the benchmark table is empty. Returns the number inserted.
    async fn seed_benchmarks(&self, seed: &BenchmarkSeed) -> EngineResult<usize> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM industry_benchmarks")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        let rows = seed.rows();
        for row in &rows {
            sqlx::query(
                "INSERT INTO industry_benchmarks \
                 (industry, average_raise, median_raise, top_quartile_raise, year) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(row.industry.as_str())
            .bind(row.average_raise)
            .bind(row.median_raise)
            .bind(row.top_quartile_raise)
            .bind(row.year)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(rows.len())
    }
}

#[async_trait]
impl Storage for PgStorage {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn get_user(&self, id: i32) -> EngineResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn get_user_by_username(&self, username: &str) -> EngineResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn create_user(&self, user: NewUser) -> EngineResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, password) VALUES ($1, $2) \
             RETURNING id, username, password",
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return EngineError::DuplicateUsername {
                        username: user.username.clone(),
                    };
                }
            }
            EngineError::from(err)
        })?;
        Ok(row.into())
    }

    async fn create_calculation(&self, calculation: NewCalculation) -> EngineResult<Calculation> {
        let sql = format!(
            "INSERT INTO calculations (current_salary, raise_percentage, raise_amount, \
             target_salary, pay_period, include_inflation, include_taxes, industry, location, \
             session_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {CALCULATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(calculation.current_salary)
            .bind(calculation.raise_percentage)
            .bind(calculation.raise_amount)
            .bind(calculation.target_salary)
            .bind(calculation.pay_period.as_str())
            .bind(calculation.include_inflation)
            .bind(calculation.include_taxes)
            .bind(&calculation.industry)
            .bind(&calculation.location)
            .bind(&calculation.session_id)
            .fetch_one(&self.pool)
            .await?;
        row.try_into()
    }

    async fn get_calculations_by_session(
        &self,
        session_id: &str,
    ) -> EngineResult<Vec<Calculation>> {
        let sql = format!(
            "SELECT {CALCULATION_COLUMNS} FROM calculations WHERE session_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(session_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Calculation::try_from)
            .collect()
    }

    async fn get_industry_benchmarks(
        &self,
        year: Option<i32>,
    ) -> EngineResult<Vec<IndustryBenchmark>> {
        let sql = format!(
            "SELECT {BENCHMARK_COLUMNS} FROM industry_benchmarks \
             WHERE $1::INTEGER IS NULL OR year = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, BenchmarkRow>(&sql)
            .bind(year)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(IndustryBenchmark::try_from)
            .collect()
    }

    async fn get_industry_benchmark(
        &self,
        industry: Industry,
        year: i32,
    ) -> EngineResult<Option<IndustryBenchmark>> {
        let sql = format!(
            "SELECT {BENCHMARK_COLUMNS} FROM industry_benchmarks \
             WHERE industry = $1 AND year = $2 ORDER BY id ASC LIMIT 1"
        );
        sqlx::query_as::<_, BenchmarkRow>(&sql)
            .bind(industry.as_str())
            .bind(year)
            .fetch_optional(&self.pool)
            .await?
            .map(IndustryBenchmark::try_from)
            .transpose()
    }

    async fn create_industry_benchmark(
        &self,
        benchmark: NewIndustryBenchmark,
    ) -> EngineResult<IndustryBenchmark> {
        // no unique constraint in the schema; writers serialize on the seed lock
        let mut tx = self.pool.begin().await?;
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM industry_benchmarks WHERE industry = $1 AND year = $2)",
        )
        .bind(benchmark.industry.as_str())
        .bind(benchmark.year)
        .fetch_one(&mut *tx)
        .await?;
        if exists {
            tx.rollback().await?;
            return Err(EngineError::DuplicateBenchmark {
                industry: benchmark.industry.to_string(),
                year: benchmark.year,
            });
        }

        let sql = format!(
            "INSERT INTO industry_benchmarks \
             (industry, average_raise, median_raise, top_quartile_raise, year) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {BENCHMARK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BenchmarkRow>(&sql)
            .bind(benchmark.industry.as_str())
            .bind(benchmark.average_raise)
            .bind(benchmark.median_raise)
            .bind(benchmark.top_quartile_raise)
            .bind(benchmark.year)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        row.try_into()
    }
}
