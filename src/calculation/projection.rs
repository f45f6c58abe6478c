//! Compound raise projection.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::YearProjection;

/// Default projection horizon in years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Applies `percentage` to `annual` once per year for `years` years.
///
/// Each entry records the salary at the end of that year, the increase
/// applied during it, and the total increase since year 0.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `raiseValue` when the compounded
/// salary leaves the `Decimal` range.
///
/// # Examples
///
/// ```
/// use payraise_engine::calculation::compound_projection;
/// use rust_decimal::Decimal;
///
/// let years = compound_projection(Decimal::from(100_000), Decimal::from(10), 2)?;
/// assert_eq!(years[0].salary, Decimal::from(110_000));
/// assert_eq!(years[1].salary, Decimal::from(121_000));
/// assert_eq!(years[1].cumulative_increase, Decimal::from(21_000));
/// # Ok::<(), payraise_engine::error::EngineError>(())
/// ```
pub fn compound_projection(
    annual: Decimal,
    percentage: Decimal,
    years: u32,
) -> EngineResult<Vec<YearProjection>> {
    let out_of_range = || EngineError::invalid_input("raiseValue", "projection out of range");
    let factor = percentage
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|rate| Decimal::ONE.checked_add(rate))
        .ok_or_else(out_of_range)?;
    let mut salary = annual;

    (1..=years)
        .map(|year| -> EngineResult<YearProjection> {
            let next = salary.checked_mul(factor).ok_or_else(out_of_range)?;
            let increase = next.checked_sub(salary).ok_or_else(out_of_range)?;
            salary = next;
            Ok(YearProjection {
                year,
                salary,
                increase,
                cumulative_increase: salary.checked_sub(annual).ok_or_else(out_of_range)?,
            })
        })
        .collect()
}
