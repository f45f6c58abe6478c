//! Marginal tax rate estimation.
//!
//! Used when a request asks for a tax-adjusted increase without supplying
//! its own rate.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// Returns the rate of the first bracket whose inclusive upper bound covers
/// `annual_income`.
///
/// Falls back to the last bracket's rate when no bound matches, and to zero
/// for an empty bracket list.
///
/// # Examples
///
/// ```
/// use payraise_engine::calculation::estimate_tax_rate;
/// use payraise_engine::config::CalculatorSettings;
/// use rust_decimal::Decimal;
///
/// let brackets = CalculatorSettings::default().tax_brackets;
/// assert_eq!(estimate_tax_rate(Decimal::from(20_000), &brackets), Decimal::from(10));
/// assert_eq!(estimate_tax_rate(Decimal::from(20_001), &brackets), Decimal::from(15));
/// ```
pub fn estimate_tax_rate(annual_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    brackets
        .iter()
        .find(|bracket| bracket.up_to.is_none_or(|limit| annual_income <= limit))
        .or_else(|| brackets.last())
        .map(|bracket| bracket.rate)
        .unwrap_or(Decimal::ZERO)
}
