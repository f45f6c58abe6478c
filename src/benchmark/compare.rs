//! Comparing a raise against industry benchmarks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::IndustryBenchmark;

/// Where a raise sits relative to its industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    /// Above the industry average.
    Above,
    /// Around the industry median.
    Average,
    /// Below the industry median.
    Below,
}

/// The outcome of comparing a raise with an industry benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryComparison {
    /// Coarse classification.
    pub status: ComparisonStatus,
    /// Human-readable summary.
    pub message: String,
    /// Approximate percentile; absent when no benchmark exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,
}

/// Classifies `raise` against `benchmark`.
///
/// Thresholds are checked in order: top quartile, average, median. A raise
/// equal to the top quartile is therefore reported at the 75th percentile.
/// Without a benchmark the result is a neutral `average` with no percentile.
pub fn compare_with_benchmark(
    raise: Decimal,
    industry_name: &str,
    benchmark: Option<&IndustryBenchmark>,
) -> IndustryComparison {
    let Some(benchmark) = benchmark else {
        return IndustryComparison {
            status: ComparisonStatus::Average,
            message: format!(
                "No benchmark data is available for {}; your raise could not be compared.",
                industry_name
            ),
            percentile: None,
        };
    };

    let industry = benchmark.industry;
    let (status, percentile, message) = if raise >= benchmark.top_quartile_raise {
        (
            ComparisonStatus::Above,
            75,
            format!(
                "Your raise is in the top quartile for {} (top quartile {}%).",
                industry, benchmark.top_quartile_raise
            ),
        )
    } else if raise >= benchmark.average_raise {
        (
            ComparisonStatus::Above,
            60,
            format!(
                "Your raise is above the {} average of {}%.",
                industry, benchmark.average_raise
            ),
        )
    } else if raise >= benchmark.median_raise {
        (
            ComparisonStatus::Average,
            50,
            format!(
                "Your raise is in line with the {} median of {}%.",
                industry, benchmark.median_raise
            ),
        )
    } else {
        (
            ComparisonStatus::Below,
            30,
            format!(
                "Your raise is below the {} median of {}%.",
                industry, benchmark.median_raise
            ),
        )
    };

    IndustryComparison {
        status,
        message,
        percentile: Some(percentile),
    }
}
