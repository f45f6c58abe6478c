//! Raise request models.
//!
//! A [`RaiseRequest`] describes the current pay of a person and the raise
//! they are considering, expressed in one of the three [`RaiseMode`]s.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;
use crate::error::EngineError;

/// How the raise value of a request should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RaiseMode {
    /// The raise value is a percentage of current pay; negative values model pay cuts.
    Percentage,
    /// The raise value is a signed amount in the request's pay period.
    Amount,
    /// The raise value is the desired pay in the request's pay period.
    Target,
}

impl RaiseMode {
    /// Returns the lowercase wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            RaiseMode::Percentage => "percentage",
            RaiseMode::Amount => "amount",
            RaiseMode::Target => "target",
        }
    }
}

impl fmt::Display for RaiseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaiseMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage" => Ok(RaiseMode::Percentage),
            "amount" => Ok(RaiseMode::Amount),
            "target" => Ok(RaiseMode::Target),
            other => Err(EngineError::invalid_input(
                "mode",
                format!("unknown raise mode '{}'", other),
            )),
        }
    }
}

impl TryFrom<String> for RaiseMode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A request to calculate the effect of a raise.
///
/// # Example
///
/// ```
/// use payraise_engine::models::{PayPeriod, RaiseMode, RaiseRequest};
/// use rust_decimal::Decimal;
///
/// let request = RaiseRequest::new(
///     Decimal::from(60_000),
///     PayPeriod::Annual,
///     RaiseMode::Percentage,
///     Decimal::from(5),
/// )
/// .with_inflation()
/// .with_taxes(None);
/// assert!(request.include_inflation);
/// assert!(request.include_taxes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiseRequest {
    /// Current pay, denominated in `pay_period`.
    pub current_pay: Decimal,
    /// The period `current_pay` (and amount/target raise values) are expressed in.
    #[serde(default)]
    pub pay_period: PayPeriod,
    /// How `raise_value` is interpreted.
    pub mode: RaiseMode,
    /// Percentage, signed amount or target pay depending on `mode`.
    pub raise_value: Decimal,
    /// Hours worked per week. Required for hourly pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<Decimal>,
    /// Whether to report the inflation-adjusted raise.
    #[serde(default)]
    pub include_inflation: bool,
    /// Whether to report the tax-adjusted increase.
    #[serde(default)]
    pub include_taxes: bool,
    /// Explicit marginal tax rate in percent; estimated from brackets when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Industry tag used for benchmark comparisons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Free-form location tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl RaiseRequest {
    /// Creates a request with no optional adjustments.
    pub fn new(
        current_pay: Decimal,
        pay_period: PayPeriod,
        mode: RaiseMode,
        raise_value: Decimal,
    ) -> Self {
        Self {
            current_pay,
            pay_period,
            mode,
            raise_value,
            hours_per_week: None,
            include_inflation: false,
            include_taxes: false,
            tax_rate: None,
            industry: None,
            location: None,
        }
    }

    /// Sets the hours worked per week.
    pub fn with_hours_per_week(mut self, hours: Decimal) -> Self {
        self.hours_per_week = Some(hours);
        self
    }

    /// Requests the inflation-adjusted raise.
    pub fn with_inflation(mut self) -> Self {
        self.include_inflation = true;
        self
    }

    /// Requests the tax-adjusted increase, optionally with an explicit rate.
    pub fn with_taxes(mut self, tax_rate: Option<Decimal>) -> Self {
        self.include_taxes = true;
        self.tax_rate = tax_rate;
        self
    }
}
