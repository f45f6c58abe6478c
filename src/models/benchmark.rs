//! Industry benchmark models.
//!
//! An [`IndustryBenchmark`] records typical raise percentages for one
//! [`Industry`] in one year.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Year of the bundled benchmark dataset; lookups default to it.
pub const DEFAULT_BENCHMARK_YEAR: i32 = 2025;

/// The fixed set of industries benchmarks are published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    /// Software, hardware and IT services.
    Technology,
    /// Hospitals, clinics and care providers.
    Healthcare,
    /// Banking, insurance and investment.
    Finance,
    /// Schools and universities.
    Education,
    /// Stores and e-commerce.
    Retail,
    /// Production and industrial work.
    Manufacturing,
    /// Public sector.
    Government,
    /// Hotels, restaurants and tourism.
    Hospitality,
}

impl Industry {
    /// All industries, in seed order.
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Government,
        Industry::Hospitality,
    ];

    /// Returns the display name, which is also the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::Government => "Government",
            Industry::Hospitality => "Hospitality",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Industry::ALL
            .into_iter()
            .find(|industry| industry.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                EngineError::invalid_input("industry", format!("unknown industry '{}'", needle))
            })
    }
}

/// A stored benchmark row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBenchmark {
    /// Storage-assigned identifier.
    pub id: i32,
    /// The industry this row describes.
    pub industry: Industry,
    /// Mean raise percentage.
    pub average_raise: Decimal,
    /// Median raise percentage.
    pub median_raise: Decimal,
    /// Raise percentage at the 75th percentile.
    pub top_quartile_raise: Decimal,
    /// The year the figures apply to.
    pub year: i32,
    /// When the row was written.
    pub last_updated: DateTime<Utc>,
}

/// DTO for creating a benchmark row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIndustryBenchmark {
    /// The industry this row describes.
    pub industry: Industry,
    /// Mean raise percentage.
    pub average_raise: Decimal,
    /// Median raise percentage.
    pub median_raise: Decimal,
    /// Raise percentage at the 75th percentile.
    pub top_quartile_raise: Decimal,
    /// The year the figures apply to.
    pub year: i32,
}

impl NewIndustryBenchmark {
    /// Materializes the row with an id and timestamp.
    pub fn into_benchmark(self, id: i32, last_updated: DateTime<Utc>) -> IndustryBenchmark {
        IndustryBenchmark {
            id,
            industry: self.industry,
            average_raise: self.average_raise,
            median_raise: self.median_raise,
            top_quartile_raise: self.top_quartile_raise,
            year: self.year,
            last_updated,
        }
    }
}
