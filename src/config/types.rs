//! Configuration types for the Pay Raise Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! documented default so a partial (or missing) file still yields a
//! complete configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_BENCHMARK_YEAR, Industry, NewIndustryBenchmark};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on. Default `0.0.0.0:5000`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Storage backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// PostgreSQL connection URL. The in-memory backend is used when absent.
    pub database_url: Option<String>,
    /// Maximum pool size. Default 5.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection. Default 5.
    pub acquire_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

/// One marginal tax bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of annual income; `None` for the top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// Rate in percent.
    pub rate: Decimal,
}

impl TaxBracket {
    fn new(up_to: Option<i64>, rate: i64) -> Self {
        Self {
            up_to: up_to.map(Decimal::from),
            rate: Decimal::from(rate),
        }
    }
}

/// Constants used by the raise calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Reference inflation rate in percent. Default 3.1.
    pub inflation_rate: Decimal,
    /// Hours per week assumed when a request omits them. Default 40.
    pub default_hours_per_week: Decimal,
    /// Length of the compound projection in years. Default 5.
    pub projection_years: u32,
    /// Tax brackets in ascending order. Default 10/15/22/24/32/35.
    pub tax_brackets: Vec<TaxBracket>,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            inflation_rate: Decimal::new(31, 1),
            default_hours_per_week: Decimal::from(40),
            projection_years: 5,
            tax_brackets: vec![
                TaxBracket::new(Some(20_000), 10),
                TaxBracket::new(Some(40_000), 15),
                TaxBracket::new(Some(80_000), 22),
                TaxBracket::new(Some(160_000), 24),
                TaxBracket::new(Some(200_000), 32),
                TaxBracket::new(None, 35),
            ],
        }
    }
}

impl CalculatorSettings {
    /// Checks internal consistency, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_hours_per_week <= Decimal::ZERO {
            return Err("default_hours_per_week must be positive".to_string());
        }
        if self.projection_years == 0 {
            return Err("projection_years must be at least 1".to_string());
        }
        let Some(last) = self.tax_brackets.last() else {
            return Err("tax_brackets must not be empty".to_string());
        };
        if last.up_to.is_some() {
            return Err("the last tax bracket must have no upper bound".to_string());
        }
        let bounds: Vec<Decimal> = self.tax_brackets.iter().filter_map(|b| b.up_to).collect();
        if bounds.len() != self.tax_brackets.len() - 1 {
            return Err("only the last tax bracket may omit up_to".to_string());
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("tax bracket bounds must be strictly ascending".to_string());
        }
        Ok(())
    }
}

/// Seed figures for one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkSeedRow {
    /// The industry.
    pub industry: Industry,
    /// Mean raise percentage.
    pub average_raise: Decimal,
    /// Median raise percentage.
    pub median_raise: Decimal,
    /// 75th percentile raise percentage.
    pub top_quartile_raise: Decimal,
}

impl BenchmarkSeedRow {
    fn new(industry: Industry, average: i64, median: i64, top_quartile: i64) -> Self {
        Self {
            industry,
            average_raise: Decimal::new(average, 1),
            median_raise: Decimal::new(median, 1),
            top_quartile_raise: Decimal::new(top_quartile, 1),
        }
    }
}

/// The benchmark dataset written to storage at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkSeed {
    /// Year the seed figures apply to. Default 2025.
    pub year: i32,
    /// Per-industry figures.
    pub industries: Vec<BenchmarkSeedRow>,
}

impl Default for BenchmarkSeed {
    fn default() -> Self {
        Self {
            year: DEFAULT_BENCHMARK_YEAR,
            industries: vec![
                BenchmarkSeedRow::new(Industry::Technology, 42, 40, 65),
                BenchmarkSeedRow::new(Industry::Healthcare, 38, 35, 55),
                BenchmarkSeedRow::new(Industry::Finance, 40, 38, 60),
                BenchmarkSeedRow::new(Industry::Education, 30, 28, 42),
                BenchmarkSeedRow::new(Industry::Retail, 32, 30, 45),
                BenchmarkSeedRow::new(Industry::Manufacturing, 35, 33, 50),
                BenchmarkSeedRow::new(Industry::Government, 28, 25, 38),
                BenchmarkSeedRow::new(Industry::Hospitality, 33, 30, 48),
            ],
        }
    }
}

impl BenchmarkSeed {
    /// Returns the seed as insertable rows, in configured order.
    pub fn rows(&self) -> Vec<NewIndustryBenchmark> {
        self.industries
            .iter()
            .map(|row| NewIndustryBenchmark {
                industry: row.industry,
                average_raise: row.average_raise,
                median_raise: row.median_raise,
                top_quartile_raise: row.top_quartile_raise,
                year: self.year,
            })
            .collect()
    }

    /// Checks that no industry appears twice.
    pub fn validate(&self) -> Result<(), String> {
        for (i, row) in self.industries.iter().enumerate() {
            if self.industries[..i].iter().any(|r| r.industry == row.industry) {
                return Err(format!("industry {} is seeded twice", row.industry));
            }
        }
        Ok(())
    }
}

/// Static economic reference data served alongside the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicDataConfig {
    /// Label for when the inflation figure was published.
    pub cpi_last_updated: String,
    /// Attribution for the inflation figure.
    pub source: String,
}

impl Default for EconomicDataConfig {
    fn default() -> Self {
        Self {
            cpi_last_updated: "2025-01".to_string(),
            source: "Bureau of Labor Statistics".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Storage backend settings.
    pub storage: StorageConfig,
    /// Calculation constants.
    pub calculator: CalculatorSettings,
    /// Benchmark seed dataset.
    pub benchmarks: BenchmarkSeed,
    /// Economic reference data.
    pub economic: EconomicDataConfig,
}
