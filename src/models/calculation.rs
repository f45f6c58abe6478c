//! Persisted calculation models.
//!
//! A [`Calculation`] is an immutable capture of a submitted raise request.
//! Submissions arrive as [`NewCalculation`] and must pass
//! [`NewCalculation::validate`] before they are stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayPeriod, RaiseMode, RaiseRequest};
use crate::error::{EngineError, EngineResult};

/// Exclusive upper bound for `decimal(12,2)` money columns.
const MONEY_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Exclusive upper bound for `decimal(5,2)` percentage columns.
const PERCENT_LIMIT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Fractional digits every numeric column keeps.
const COLUMN_SCALE: u32 = 2;

/// A stored calculation submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Current salary as submitted.
    pub current_salary: Decimal,
    /// Raise percentage, for percentage submissions.
    pub raise_percentage: Option<Decimal>,
    /// Raise amount, for amount submissions.
    pub raise_amount: Option<Decimal>,
    /// Target salary, for target submissions.
    pub target_salary: Option<Decimal>,
    /// Period the salary figures are expressed in.
    pub pay_period: PayPeriod,
    /// Whether inflation adjustment was requested.
    pub include_inflation: Option<bool>,
    /// Whether tax adjustment was requested.
    pub include_taxes: Option<bool>,
    /// Industry tag.
    pub industry: Option<String>,
    /// Location tag.
    pub location: Option<String>,
    /// Browser session the submission belongs to.
    pub session_id: Option<String>,
    /// When the submission was stored.
    pub created_at: DateTime<Utc>,
}

/// DTO for submitting a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    /// Current salary.
    pub current_salary: Decimal,
    /// Raise percentage.
    #[serde(default)]
    pub raise_percentage: Option<Decimal>,
    /// Raise amount.
    #[serde(default)]
    pub raise_amount: Option<Decimal>,
    /// Target salary.
    #[serde(default)]
    pub target_salary: Option<Decimal>,
    /// Defaults to annual if omitted.
    #[serde(default)]
    pub pay_period: PayPeriod,
    /// Whether inflation adjustment was requested.
    #[serde(default)]
    pub include_inflation: Option<bool>,
    /// Whether tax adjustment was requested.
    #[serde(default)]
    pub include_taxes: Option<bool>,
    /// Industry tag.
    #[serde(default)]
    pub industry: Option<String>,
    /// Location tag.
    #[serde(default)]
    pub location: Option<String>,
    /// Browser session the submission belongs to.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl NewCalculation {
    /// Captures a raise request as a submission.
    pub fn from_request(request: &RaiseRequest, session_id: Option<String>) -> Self {
        let (raise_percentage, raise_amount, target_salary) = match request.mode {
            RaiseMode::Percentage => (Some(request.raise_value), None, None),
            RaiseMode::Amount => (None, Some(request.raise_value), None),
            RaiseMode::Target => (None, None, Some(request.raise_value)),
        };

        Self {
            current_salary: request.current_pay,
            raise_percentage,
            raise_amount,
            target_salary,
            pay_period: request.pay_period,
            include_inflation: Some(request.include_inflation),
            include_taxes: Some(request.include_taxes),
            industry: request.industry.clone(),
            location: request.location.clone(),
            session_id,
        }
    }

    /// Checks the submission against the column constraints of the schema.
    pub fn validate(&self) -> EngineResult<()> {
        if self.current_salary <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "currentSalary",
                "must be greater than zero",
            ));
        }
        check_range("currentSalary", self.current_salary, MONEY_LIMIT)?;

        let specified = [
            self.raise_percentage.is_some(),
            self.raise_amount.is_some(),
            self.target_salary.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        if specified > 1 {
            return Err(EngineError::invalid_input(
                "raise",
                "only one of raisePercentage, raiseAmount and targetSalary may be set",
            ));
        }

        if let Some(percentage) = self.raise_percentage {
            check_range("raisePercentage", percentage, PERCENT_LIMIT)?;
        }
        if let Some(amount) = self.raise_amount {
            check_range("raiseAmount", amount, MONEY_LIMIT)?;
        }
        if let Some(target) = self.target_salary {
            check_range("targetSalary", target, MONEY_LIMIT)?;
        }
        Ok(())
    }

    /// Materializes the submission with an id and timestamp.
    pub fn into_calculation(self, id: i32, created_at: DateTime<Utc>) -> Calculation {
        Calculation {
            id,
            current_salary: self.current_salary,
            raise_percentage: self.raise_percentage,
            raise_amount: self.raise_amount,
            target_salary: self.target_salary,
            pay_period: self.pay_period,
            include_inflation: self.include_inflation,
            include_taxes: self.include_taxes,
            industry: self.industry,
            location: self.location,
            session_id: self.session_id,
            created_at,
        }
    }
}

fn check_range(field: &str, value: Decimal, limit: Decimal) -> EngineResult<()> {
    // the columns round extra digits, so only exact values are accepted
    if value.normalize().scale() > COLUMN_SCALE {
        return Err(EngineError::invalid_input(
            field,
            format!("must have at most {} decimal places", COLUMN_SCALE),
        ));
    }
    if value.abs() >= limit {
        return Err(EngineError::invalid_input(
            field,
            format!("must be smaller than {} in magnitude", limit),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn submission() -> NewCalculation {
        NewCalculation {
            current_salary: Decimal::from(65_000),
            raise_percentage: Some(Decimal::new(45, 1)),
            raise_amount: None,
            target_salary: None,
            pay_period: PayPeriod::Annual,
            include_inflation: Some(true),
            include_taxes: None,
            industry: Some("Technology".to_string()),
            location: None,
            session_id: Some("s1".to_string()),
        }
    }

    #[test]
    fn test_limits_match_column_precision() {
        assert_eq!(MONEY_LIMIT, Decimal::from(10_000_000_000i64));
        assert_eq!(PERCENT_LIMIT, Decimal::from(1_000));
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_non_positive_salary_is_rejected() {
        let mut calc = submission();
        calc.current_salary = Decimal::ZERO;
        match calc.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "currentSalary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_raise_modes_are_rejected() {
        let mut calc = submission();
        calc.target_salary = Some(Decimal::from(70_000));
        assert!(calc.validate().is_err());
    }

    #[test]
    fn test_out_of_range_percentage_is_rejected() {
        let mut calc = submission();
        calc.raise_percentage = Some(Decimal::from(1_000));
        assert!(calc.validate().is_err());
    }

    #[test]
    fn test_extra_decimal_places_are_rejected() {
        let mut calc = submission();
        calc.current_salary = Decimal::from_str("9999999999.999").unwrap();
        match calc.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "currentSalary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }

        let mut calc = submission();
        calc.raise_percentage = Some(Decimal::from_str("999.999").unwrap());
        match calc.validate() {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "raisePercentage"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let mut calc = submission();
        calc.current_salary = Decimal::from_str("65000.5000").unwrap();
        calc.raise_percentage = Some(Decimal::from_str("3.250").unwrap());
        assert!(calc.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_is_allowed() {
        let mut calc = submission();
        calc.raise_percentage = None;
        calc.raise_amount = Some(Decimal::from(-500));
        assert!(calc.validate().is_ok());
    }

    #[test]
    fn test_from_request_places_value_by_mode() {
        let request = RaiseRequest::new(
            Decimal::from(4_000),
            PayPeriod::Monthly,
            RaiseMode::Target,
            Decimal::from(4_400),
        );
        let calc = NewCalculation::from_request(&request, Some("abc".to_string()));
        assert_eq!(calc.target_salary, Some(Decimal::from(4_400)));
        assert!(calc.raise_percentage.is_none());
        assert!(calc.raise_amount.is_none());
        assert_eq!(calc.pay_period, PayPeriod::Monthly);
        assert_eq!(calc.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_deserialize_defaults_pay_period() {
        let json = r#"{"currentSalary": "50000.00", "raisePercentage": "3.50"}"#;
        let calc: NewCalculation = serde_json::from_str(json).unwrap();
        assert_eq!(calc.pay_period, PayPeriod::Annual);
        assert!(calc.session_id.is_none());
    }
}
