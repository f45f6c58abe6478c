//! Static market reference data.
//!
//! These figures are published with the calculator rather than computed; they
//! change only with a new release.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::models::Industry;

/// The reference inflation figure and its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationSnapshot {
    /// Year-over-year CPI change in percent.
    #[serde(rename = "currentCPI")]
    pub current_cpi: Decimal,
    /// When the figure was published.
    pub last_updated: String,
    /// Who published it.
    pub source: String,
}

/// Economy-wide raise trends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    /// Average raise across industries, in percent.
    pub average_raise: Decimal,
    /// Projected average raise for next year.
    pub projected_raise: Decimal,
    /// Unemployment rate, in percent.
    pub unemployment_rate: Decimal,
    /// Year-over-year wage growth, in percent.
    pub wage_growth: Decimal,
    /// Industries with the strongest raise outlook.
    pub hot_industries: Vec<Industry>,
    /// Year the figures describe.
    pub year: i32,
}

/// Average raise for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRaise {
    /// Calendar year.
    pub year: i32,
    /// Average raise in percent.
    pub average_raise: Decimal,
}

/// Raise history and outlook for one industry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryTrend {
    /// The industry described.
    pub industry: Industry,
    /// Average raises for recent years, oldest first.
    pub history: Vec<YearlyRaise>,
    /// Short outlook statement.
    pub outlook: String,
    /// Skills commanding premium raises.
    pub in_demand_skills: Vec<String>,
}

/// Returns the inflation figure the calculator uses.
pub fn inflation_snapshot(config: &ConfigLoader) -> InflationSnapshot {
    InflationSnapshot {
        current_cpi: config.calculator().inflation_rate,
        last_updated: config.economic().cpi_last_updated.clone(),
        source: config.economic().source.clone(),
    }
}

/// Returns the economy-wide raise trends.
pub fn market_trends() -> MarketTrends {
    MarketTrends {
        average_raise: Decimal::new(35, 1),
        projected_raise: Decimal::new(34, 1),
        unemployment_rate: Decimal::new(41, 1),
        wage_growth: Decimal::new(39, 1),
        hot_industries: vec![Industry::Technology, Industry::Healthcare, Industry::Finance],
        year: 2025,
    }
}

/// Returns the trend for `industry`, falling back to Technology when the
/// name is missing or not a known industry.
pub fn salary_trends(industry: Option<&str>) -> SalaryTrend {
    let industry = industry
        .and_then(|name| name.parse::<Industry>().ok())
        .unwrap_or(Industry::Technology);

    let (history, outlook, skills): ([i64; 3], &str, &[&str]) = match industry {
        Industry::Technology => (
            [45, 41, 42],
            "Strong demand keeps raises above the national average.",
            &["Cloud architecture", "Machine learning", "Security engineering"],
        ),
        Industry::Healthcare => (
            [40, 39, 38],
            "Staffing shortages continue to support steady raises.",
            &["Nursing", "Health informatics", "Clinical specialties"],
        ),
        Industry::Finance => (
            [42, 40, 40],
            "Raises remain solid, concentrated in technical roles.",
            &["Risk modeling", "Compliance", "Data analytics"],
        ),
        Industry::Education => (
            [31, 30, 30],
            "Budgets constrain raises to roughly inflation.",
            &["STEM teaching", "Special education", "Instructional design"],
        ),
        Industry::Retail => (
            [36, 33, 32],
            "Raises are cooling after the post-pandemic surge.",
            &["E-commerce operations", "Supply chain", "Store management"],
        ),
        Industry::Manufacturing => (
            [38, 36, 35],
            "Automation skills earn the largest increases.",
            &["Industrial automation", "Quality engineering", "Maintenance"],
        ),
        Industry::Government => (
            [30, 29, 28],
            "Raises follow scheduled pay tables.",
            &["Cybersecurity", "Program management", "Policy analysis"],
        ),
        Industry::Hospitality => (
            [39, 35, 33],
            "Raises are normalizing as hiring pressure eases.",
            &["Revenue management", "Culinary leadership", "Guest experience"],
        ),
    };

    SalaryTrend {
        industry,
        history: (2023..)
            .zip(history)
            .map(|(year, tenths)| YearlyRaise {
                year,
                average_raise: Decimal::new(tenths, 1),
            })
            .collect(),
        outlook: outlook.to_string(),
        in_demand_skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}
