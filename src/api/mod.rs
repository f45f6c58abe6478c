//! HTTP API module for the Pay Raise Engine.
//!
//! This module provides the REST endpoints for raise calculations, stored
//! submissions, industry benchmarks and market reference data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompareQuery, IndustryQuery, RaiseCalculationRequest, YearQuery};
pub use response::{ApiError, ApiErrorResponse, HealthStatus, RaiseReport};
pub use state::AppState;
