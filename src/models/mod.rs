//! Core data models for the Pay Raise Engine.
//!
//! This module contains the transient calculation types and the records
//! owned by the storage layer.

mod benchmark;
mod calculation;
mod pay_period;
mod raise_request;
mod raise_result;
mod user;

pub use benchmark::{DEFAULT_BENCHMARK_YEAR, Industry, IndustryBenchmark, NewIndustryBenchmark};
pub use calculation::{Calculation, NewCalculation};
pub use pay_period::{MONTHS_PER_YEAR, PayPeriod, WEEKS_PER_YEAR};
pub use raise_request::{RaiseMode, RaiseRequest};
pub use raise_result::{IncreaseBreakdown, PayValues, RaiseResult, YearProjection};
pub use user::{NewUser, User};
