//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type, the time unit a salary figure
//! is denominated in, together with the annualization multipliers used to
//! move figures between periods.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of weeks in a year used for weekly and hourly annualization.
pub const WEEKS_PER_YEAR: u32 = 52;

/// The time unit a pay figure is denominated in.
///
/// # Example
///
/// ```
/// use payraise_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let hours = Decimal::from(40);
/// let annual = PayPeriod::Hourly.annualize(Decimal::from(25), hours);
/// assert_eq!(annual, Decimal::from(52_000));
/// assert_eq!(PayPeriod::Monthly.from_annual(annual, hours).round_dp(2), Decimal::new(433333, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    /// Yearly salary.
    #[default]
    Annual,
    /// Monthly salary.
    Monthly,
    /// Weekly wage.
    Weekly,
    /// Hourly rate; needs hours per week to annualize.
    Hourly,
}

impl PayPeriod {
    /// All pay periods, in display order.
    pub const ALL: [PayPeriod; 4] = [
        PayPeriod::Annual,
        PayPeriod::Monthly,
        PayPeriod::Weekly,
        PayPeriod::Hourly,
    ];

    /// Returns the lowercase wire name of the period.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Annual => "annual",
            PayPeriod::Monthly => "monthly",
            PayPeriod::Weekly => "weekly",
            PayPeriod::Hourly => "hourly",
        }
    }

    /// Returns how many of this period fit in a year.
    ///
    /// `hours_per_week` is only consulted for [`PayPeriod::Hourly`].
    pub fn periods_per_year(self, hours_per_week: Decimal) -> Decimal {
        match self {
            PayPeriod::Annual => Decimal::ONE,
            PayPeriod::Monthly => Decimal::from(MONTHS_PER_YEAR),
            PayPeriod::Weekly => Decimal::from(WEEKS_PER_YEAR),
            PayPeriod::Hourly => Decimal::from(WEEKS_PER_YEAR) * hours_per_week,
        }
    }

    /// Converts an amount denominated in this period to its yearly equivalent.
    ///
    /// # Panics
    ///
    /// Panics when the result leaves the `Decimal` range. Use
    /// [`PayPeriod::checked_annualize`] for unvalidated amounts.
    pub fn annualize(self, amount: Decimal, hours_per_week: Decimal) -> Decimal {
        amount * self.periods_per_year(hours_per_week)
    }

    /// Converts a yearly amount into this period.
    ///
    /// # Panics
    ///
    /// Panics on division by zero when called for [`PayPeriod::Hourly`] with
    /// zero `hours_per_week`, and when the result leaves the `Decimal` range.
    pub fn from_annual(self, annual: Decimal, hours_per_week: Decimal) -> Decimal {
        match self {
            PayPeriod::Annual => annual,
            _ => annual / self.periods_per_year(hours_per_week),
        }
    }

    /// Like [`PayPeriod::annualize`], returning `None` on overflow.
    pub fn checked_annualize(self, amount: Decimal, hours_per_week: Decimal) -> Option<Decimal> {
        self.checked_periods_per_year(hours_per_week)
            .and_then(|periods| amount.checked_mul(periods))
    }

    /// Like [`PayPeriod::from_annual`], returning `None` on overflow or a zero divisor.
    pub fn checked_from_annual(self, annual: Decimal, hours_per_week: Decimal) -> Option<Decimal> {
        match self {
            PayPeriod::Annual => Some(annual),
            _ => self
                .checked_periods_per_year(hours_per_week)
                .and_then(|periods| annual.checked_div(periods)),
        }
    }

    fn checked_periods_per_year(self, hours_per_week: Decimal) -> Option<Decimal> {
        match self {
            PayPeriod::Hourly => Decimal::from(WEEKS_PER_YEAR).checked_mul(hours_per_week),
            _ => Some(self.periods_per_year(hours_per_week)),
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annual" => Ok(PayPeriod::Annual),
            "monthly" => Ok(PayPeriod::Monthly),
            "weekly" => Ok(PayPeriod::Weekly),
            "hourly" => Ok(PayPeriod::Hourly),
            other => Err(EngineError::invalid_input(
                "payPeriod",
                format!("unknown pay period '{}'", other),
            )),
        }
    }
}
