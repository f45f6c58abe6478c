//! Benchmark lookups backed by storage.

use rust_decimal::Decimal;
use tracing::debug;

use super::compare::{IndustryComparison, compare_with_benchmark};
use super::inflation::{InflationAdjustment, adjust_for_inflation};
use crate::error::EngineResult;
use crate::models::{DEFAULT_BENCHMARK_YEAR, Industry, IndustryBenchmark};
use crate::storage::SharedStorage;

/// Read-only view over the benchmark rows held by storage.
///
/// Industry names are resolved case-insensitively; a name outside the known
/// set behaves like a missing row.
#[derive(Clone)]
pub struct BenchmarkLookup {
    storage: SharedStorage,
    default_year: i32,
    inflation_rate: Decimal,
}

impl BenchmarkLookup {
    /// Creates a lookup defaulting to [`DEFAULT_BENCHMARK_YEAR`].
    pub fn new(storage: SharedStorage, inflation_rate: Decimal) -> Self {
        Self {
            storage,
            default_year: DEFAULT_BENCHMARK_YEAR,
            inflation_rate,
        }
    }

    /// Overrides the year used when callers do not specify one.
    pub fn with_default_year(mut self, year: i32) -> Self {
        self.default_year = year;
        self
    }

    /// The year used when callers do not specify one.
    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    /// Lists benchmark rows in insertion order, optionally for one year.
    pub async fn list_benchmarks(
        &self,
        year: Option<i32>,
    ) -> EngineResult<Vec<IndustryBenchmark>> {
        self.storage.get_industry_benchmarks(year).await
    }

    /// Fetches the row for `industry` in `year` (default year when `None`).
    pub async fn get_benchmark(
        &self,
        industry: &str,
        year: Option<i32>,
    ) -> EngineResult<Option<IndustryBenchmark>> {
        let Ok(industry) = industry.parse::<Industry>() else {
            debug!(industry, "Unknown industry requested");
            return Ok(None);
        };
        self.storage
            .get_industry_benchmark(industry, year.unwrap_or(self.default_year))
            .await
    }

    /// Compares a raise percentage with the default-year benchmark of `industry`.
    pub async fn compare_to_industry(
        &self,
        raise: Decimal,
        industry: &str,
    ) -> EngineResult<IndustryComparison> {
        let benchmark = self.get_benchmark(industry, None).await?;
        Ok(compare_with_benchmark(raise, industry, benchmark.as_ref()))
    }

    /// Adjusts a nominal raise for the configured inflation rate.
    pub fn adjust_for_inflation(&self, nominal_raise: Decimal) -> InflationAdjustment {
        adjust_for_inflation(nominal_raise, self.inflation_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{ComparisonStatus, InflationStatus};
    use crate::config::BenchmarkSeed;
    use crate::storage::MemStorage;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn lookup() -> BenchmarkLookup {
        let storage = Arc::new(MemStorage::new(&BenchmarkSeed::default()));
        BenchmarkLookup::new(storage, dec("3.1"))
    }

    async fn compare(raise: &str, industry: &str) -> IndustryComparison {
        lookup()
            .compare_to_industry(dec(raise), industry)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_at_top_quartile_is_above_75() {
        let result = compare("6.5", "Technology").await;
        assert_eq!(result.status, ComparisonStatus::Above);
        assert_eq!(result.percentile, Some(75));
    }

    #[tokio::test]
    async fn test_at_average_is_above_60() {
        let result = compare("4.2", "Technology").await;
        assert_eq!(result.status, ComparisonStatus::Above);
        assert_eq!(result.percentile, Some(60));
    }

    #[tokio::test]
    async fn test_at_median_is_average_50() {
        let result = compare("4.0", "Technology").await;
        assert_eq!(result.status, ComparisonStatus::Average);
        assert_eq!(result.percentile, Some(50));
    }

    #[tokio::test]
    async fn test_below_median_is_below_30() {
        let result = compare("1.0", "Technology").await;
        assert_eq!(result.status, ComparisonStatus::Below);
        assert_eq!(result.percentile, Some(30));
    }

    #[tokio::test]
    async fn test_unknown_industry_is_neutral() {
        let result = compare("5.0", "Unknown-Industry").await;
        assert_eq!(result.status, ComparisonStatus::Average);
        assert_eq!(result.percentile, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_year() {
        let lookup = lookup();
        assert_eq!(lookup.list_benchmarks(None).await.unwrap().len(), 8);
        assert_eq!(lookup.list_benchmarks(Some(2025)).await.unwrap().len(), 8);
        assert!(lookup.list_benchmarks(Some(2019)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_defaults_to_2025_and_ignores_case() {
        let lookup = lookup();
        let row = lookup.get_benchmark("healthcare", None).await.unwrap().unwrap();
        assert_eq!(row.industry, Industry::Healthcare);
        assert_eq!(row.year, 2025);
        assert!(lookup.get_benchmark("Healthcare", Some(2024)).await.unwrap().is_none());
        assert!(lookup.get_benchmark("Mining", None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_inflation_uses_configured_rate() {
        let adjusted = lookup().adjust_for_inflation(dec("2.0"));
        assert_eq!(adjusted.real_raise, dec("-1.1"));
        assert_eq!(adjusted.status, InflationStatus::Negative);
    }
}
