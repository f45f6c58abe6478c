//! Raise result models.
//!
//! This module contains the [`RaiseResult`] type and the structures nested in
//! it. Every value is derived deterministically from a
//! [`RaiseRequest`](super::RaiseRequest) and left unrounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Per-period slices of the annual raise amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseBreakdown {
    /// Annual increase divided by 12.
    pub monthly: Decimal,
    /// Annual increase divided by 52.
    pub weekly: Decimal,
    /// Annual increase divided by yearly hours; only when hours per week were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Decimal>,
}

/// New pay expressed in every period, regardless of the request's period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayValues {
    /// Yearly pay.
    pub annual: Decimal,
    /// Monthly pay.
    pub monthly: Decimal,
    /// Weekly pay.
    pub weekly: Decimal,
    /// Hourly pay; only when hours per week were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Decimal>,
}

/// One year of a compound raise projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// Year index, starting at 1.
    pub year: u32,
    /// Projected annual salary at the end of this year.
    pub salary: Decimal,
    /// Increase applied during this year.
    pub increase: Decimal,
    /// Total increase since year 0.
    pub cumulative_increase: Decimal,
}

/// The outcome of a raise calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiseResult {
    /// The period `new_pay` and `raise_amount` are expressed in.
    pub pay_period: PayPeriod,
    /// Current pay annualized.
    pub current_annual: Decimal,
    /// New pay in the request's period.
    pub new_pay: Decimal,
    /// Raise amount in the request's period.
    pub raise_amount: Decimal,
    /// Raise relative to annualized current pay, in percent.
    pub raise_percentage: Decimal,
    /// Raise amount broken down per period.
    pub breakdown: IncreaseBreakdown,
    /// New pay in every period.
    pub annualized: PayValues,
    /// Raise percentage minus the reference inflation rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_raise_percentage: Option<Decimal>,
    /// Tax rate applied to the increase, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_tax_rate: Option<Decimal>,
    /// Annual increase after tax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_increase: Option<Decimal>,
    /// Compound projection; only for percentage raises.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projections: Option<Vec<YearProjection>>,
}
