//! Raise calculation.
//!
//! This module turns a [`RaiseRequest`] into a [`RaiseResult`]. The
//! transformation is pure: identical requests and settings always produce
//! identical results.

use rust_decimal::Decimal;

use crate::config::CalculatorSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{IncreaseBreakdown, PayPeriod, PayValues, RaiseMode, RaiseRequest, RaiseResult};

use super::projection::compound_projection;
use super::tax::estimate_tax_rate;

/// Calculates the effect of a raise.
///
/// Current pay is annualized with the request's period, the raise is applied
/// on the annual figure according to the request's mode, and the results are
/// converted back into the request's period and into every display period.
///
/// Percentage raises also carry a compound projection over
/// `settings.projection_years` years.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when:
/// - `current_pay` is not positive
/// - the period is hourly and `hours_per_week` is missing or not positive
/// - `hours_per_week` is supplied but not positive
/// - an intermediate amount leaves the `Decimal` range
///
/// # Examples
///
/// ```
/// use payraise_engine::calculation::calculate;
/// use payraise_engine::config::CalculatorSettings;
/// use payraise_engine::models::{PayPeriod, RaiseMode, RaiseRequest};
/// use rust_decimal::Decimal;
///
/// let request = RaiseRequest::new(
///     Decimal::from(50_000),
///     PayPeriod::Annual,
///     RaiseMode::Percentage,
///     Decimal::from(5),
/// );
/// let result = calculate(&request, &CalculatorSettings::default()).unwrap();
///
/// assert_eq!(result.new_pay, Decimal::from(52_500));
/// assert_eq!(result.raise_amount, Decimal::from(2_500));
/// assert_eq!(result.projections.unwrap().len(), 5);
/// ```
pub fn calculate(
    request: &RaiseRequest,
    settings: &CalculatorSettings,
) -> EngineResult<RaiseResult> {
    let hours_per_week = resolve_hours(request, settings)?;
    if request.current_pay <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "currentPay",
            "must be greater than zero",
        ));
    }

    let period = request.pay_period;
    let current_annual = period
        .checked_annualize(request.current_pay, hours_per_week)
        .ok_or_else(|| out_of_range("currentPay"))?;

    let (new_annual, raise_percentage) = match request.mode {
        RaiseMode::Percentage => {
            let new_annual = request
                .raise_value
                .checked_div(Decimal::ONE_HUNDRED)
                .and_then(|rate| Decimal::ONE.checked_add(rate))
                .and_then(|factor| current_annual.checked_mul(factor))
                .ok_or_else(|| out_of_range("raiseValue"))?;
            (new_annual, request.raise_value)
        }
        RaiseMode::Amount => {
            let new_annual = period
                .checked_annualize(request.raise_value, hours_per_week)
                .and_then(|raise| current_annual.checked_add(raise))
                .ok_or_else(|| out_of_range("raiseValue"))?;
            (new_annual, percentage_change(current_annual, new_annual)?)
        }
        RaiseMode::Target => {
            let new_annual = period
                .checked_annualize(request.raise_value, hours_per_week)
                .ok_or_else(|| out_of_range("raiseValue"))?;
            (new_annual, percentage_change(current_annual, new_annual)?)
        }
    };
    let raise_annual = new_annual
        .checked_sub(current_annual)
        .ok_or_else(|| out_of_range("raiseValue"))?;

    let convert = |period: PayPeriod, annual: Decimal, hours: Decimal| {
        period
            .checked_from_annual(annual, hours)
            .ok_or_else(|| out_of_range("hoursPerWeek"))
    };

    let supplied_hours = request.hours_per_week;
    let breakdown = IncreaseBreakdown {
        monthly: convert(PayPeriod::Monthly, raise_annual, hours_per_week)?,
        weekly: convert(PayPeriod::Weekly, raise_annual, hours_per_week)?,
        hourly: supplied_hours
            .map(|h| convert(PayPeriod::Hourly, raise_annual, h))
            .transpose()?,
    };

    let annualized = PayValues {
        annual: new_annual,
        monthly: convert(PayPeriod::Monthly, new_annual, hours_per_week)?,
        weekly: convert(PayPeriod::Weekly, new_annual, hours_per_week)?,
        hourly: supplied_hours
            .map(|h| convert(PayPeriod::Hourly, new_annual, h))
            .transpose()?,
    };

    let real_raise_percentage = request
        .include_inflation
        .then(|| {
            raise_percentage
                .checked_sub(settings.inflation_rate)
                .ok_or_else(|| out_of_range("raiseValue"))
        })
        .transpose()?;

    let effective_tax_rate = request.include_taxes.then(|| {
        request
            .tax_rate
            .unwrap_or_else(|| estimate_tax_rate(new_annual, &settings.tax_brackets))
    });
    let net_increase = effective_tax_rate
        .map(|rate| {
            rate.checked_div(Decimal::ONE_HUNDRED)
                .and_then(|share| Decimal::ONE.checked_sub(share))
                .and_then(|kept| raise_annual.checked_mul(kept))
                .ok_or_else(|| out_of_range("taxRate"))
        })
        .transpose()?;

    let projections = (request.mode == RaiseMode::Percentage)
        .then(|| {
            compound_projection(
                current_annual,
                request.raise_value,
                settings.projection_years,
            )
        })
        .transpose()?;

    Ok(RaiseResult {
        pay_period: period,
        current_annual,
        new_pay: convert(period, new_annual, hours_per_week)?,
        raise_amount: convert(period, raise_annual, hours_per_week)?,
        raise_percentage,
        breakdown,
        annualized,
        real_raise_percentage,
        effective_tax_rate,
        net_increase,
        projections,
    })
}

/// Hours used for annualization: the request's, or the configured default
/// for salaried periods.
fn resolve_hours(request: &RaiseRequest, settings: &CalculatorSettings) -> EngineResult<Decimal> {
    match request.hours_per_week {
        Some(hours) if hours <= Decimal::ZERO => Err(EngineError::invalid_input(
            "hoursPerWeek",
            "must be greater than zero",
        )),
        Some(hours) => Ok(hours),
        None if request.pay_period == PayPeriod::Hourly => Err(EngineError::invalid_input(
            "hoursPerWeek",
            "is required for hourly pay",
        )),
        None => Ok(settings.default_hours_per_week),
    }
}

/// Percentage change from `before` to `after`; `before` is positive.
fn percentage_change(before: Decimal, after: Decimal) -> EngineResult<Decimal> {
    after
        .checked_sub(before)
        .and_then(|delta| delta.checked_div(before))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| out_of_range("raiseValue"))
}

fn out_of_range(field: &str) -> EngineError {
    EngineError::invalid_input(field, "out of range")
}
