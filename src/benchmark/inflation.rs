//! Inflation commentary for a nominal raise.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a raise compares with inflation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InflationStatus {
    /// Purchasing power grows.
    Positive,
    /// Purchasing power roughly holds.
    Neutral,
    /// Purchasing power shrinks.
    Negative,
}

/// A nominal raise adjusted for inflation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationAdjustment {
    /// Nominal raise minus the inflation rate, in percent.
    pub real_raise: Decimal,
    /// Human-readable summary.
    pub message: String,
    /// Classification of `real_raise`.
    pub status: InflationStatus,
}

/// Adjusts a nominal raise percentage for `inflation_rate`.
///
/// The ladder is checked top-down: above one point, above zero, at least
/// minus half a point, and everything below.
///
/// # Examples
///
/// ```
/// use payraise_engine::benchmark::{InflationStatus, adjust_for_inflation};
/// use rust_decimal::Decimal;
///
/// let adjusted = adjust_for_inflation(Decimal::new(29, 1), Decimal::new(31, 1));
/// assert_eq!(adjusted.real_raise, Decimal::new(-2, 1));
/// assert_eq!(adjusted.status, InflationStatus::Neutral);
/// ```
pub fn adjust_for_inflation(
    nominal_raise: Decimal,
    inflation_rate: Decimal,
) -> InflationAdjustment {
    let real_raise = nominal_raise - inflation_rate;
    let half_point = Decimal::new(-5, 1);

    let (status, message) = if real_raise > Decimal::ONE {
        (
            InflationStatus::Positive,
            format!(
                "Your raise beats inflation by {}%, a meaningful gain in purchasing power.",
                real_raise.round_dp(2)
            ),
        )
    } else if real_raise > Decimal::ZERO {
        (
            InflationStatus::Positive,
            format!(
                "Your raise edges past inflation by {}%, a modest gain in purchasing power.",
                real_raise.round_dp(2)
            ),
        )
    } else if real_raise >= half_point {
        (
            InflationStatus::Neutral,
            "Your raise roughly keeps pace with inflation; purchasing power is about unchanged."
                .to_string(),
        )
    } else {
        (
            InflationStatus::Negative,
            format!(
                "Your raise trails inflation by {}%, so purchasing power declines.",
                (-real_raise).round_dp(2)
            ),
        )
    };

    InflationAdjustment {
        real_raise,
        message,
        status,
    }
}
