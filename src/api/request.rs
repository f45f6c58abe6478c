//! Request types for the Pay Raise Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! endpoints that take more than a path parameter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RaiseRequest;

/// Body of `POST /api/raise/calculate`.
///
/// The raise request fields sit at the top level; `sessionId` additionally
/// stores the submission for later retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiseCalculationRequest {
    /// The raise to calculate.
    #[serde(flatten)]
    pub raise: RaiseRequest,
    /// Session to store the submission under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// `?year=` filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearQuery {
    /// Benchmark year.
    pub year: Option<i32>,
}

/// `?industry=` selector.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryQuery {
    /// Industry name.
    pub industry: Option<String>,
}

/// `?raise=` for benchmark comparisons.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    /// Raise percentage to compare.
    pub raise: Decimal,
}
