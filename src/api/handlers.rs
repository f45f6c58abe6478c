//! HTTP request handlers for the Pay Raise Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::benchmark::market::{inflation_snapshot, market_trends, salary_trends};
use crate::calculation::calculate;
use crate::models::NewCalculation;

use super::request::{CompareQuery, IndustryQuery, RaiseCalculationRequest, YearQuery};
use super::response::{ApiErrorResponse, HealthStatus, RaiseReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/raise/calculate", post(raise_handler))
        .route("/api/calculations", post(create_calculation_handler))
        .route(
            "/api/calculations/session/:session_id",
            get(session_calculations_handler),
        )
        .route("/api/industry-benchmarks", get(list_benchmarks_handler))
        .route(
            "/api/industry-benchmarks/:industry",
            get(get_benchmark_handler),
        )
        .route(
            "/api/industry-benchmarks/:industry/compare",
            get(compare_benchmark_handler),
        )
        .route("/api/economic-data/inflation", get(inflation_handler))
        .route("/api/market-trends", get(market_trends_handler))
        .route("/api/salary-trends", get(salary_trends_handler))
        .with_state(state)
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    error.into().into_response()
}

/// Handler for GET /api/health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        backend: state.storage().backend().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /api/raise/calculate.
///
/// Calculates the raise, attaches inflation and industry context when
/// requested, and stores the submission when a session id is supplied.
async fn raise_handler(
    State(state): State<AppState>,
    payload: Result<Json<RaiseCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing raise calculation");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Rejected raise request body");
            return error_response(rejection);
        }
    };

    let start_time = Instant::now();
    let result = match calculate(&request.raise, state.config().calculator()) {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Raise calculation failed");
            return error_response(err);
        }
    };

    let inflation = request
        .raise
        .include_inflation
        .then(|| state.benchmarks().adjust_for_inflation(result.raise_percentage));

    let industry_comparison = match request.raise.industry.as_deref() {
        Some(industry) => match state
            .benchmarks()
            .compare_to_industry(result.raise_percentage, industry)
            .await
        {
            Ok(comparison) => Some(comparison),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Industry comparison unavailable");
                None
            }
        },
        None => None,
    };

    let calculation_id = match request.session_id {
        Some(session_id) => {
            let submission = NewCalculation::from_request(&request.raise, Some(session_id));
            let stored = match submission.validate() {
                Ok(()) => state.storage().create_calculation(submission).await,
                Err(err) => Err(err),
            };
            match stored {
                Ok(calculation) => Some(calculation.id),
                Err(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "Could not store raise submission");
                    None
                }
            }
        }
        None => None,
    };

    info!(
        correlation_id = %correlation_id,
        mode = %request.raise.mode,
        pay_period = %request.raise.pay_period,
        raise_percentage = %result.raise_percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Raise calculation completed"
    );

    Json(RaiseReport {
        result,
        inflation,
        industry_comparison,
        calculation_id,
    })
    .into_response()
}

/// Handler for POST /api/calculations.
async fn create_calculation_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewCalculation>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "Rejected calculation body");
            return error_response(rejection);
        }
    };

    if let Err(err) = submission.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Calculation failed validation");
        return error_response(err);
    }

    match state.storage().create_calculation(submission).await {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = calculation.id,
                session_id = calculation.session_id.as_deref().unwrap_or("-"),
                "Stored calculation"
            );
            (StatusCode::CREATED, Json(calculation)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to store calculation");
            error_response(err)
        }
    }
}

/// Handler for GET /api/calculations/session/:session_id.
async fn session_calculations_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.storage().get_calculations_by_session(&session_id).await {
        Ok(calculations) => {
            debug!(session_id = %session_id, count = calculations.len(), "Fetched session calculations");
            Json(calculations).into_response()
        }
        Err(err) => {
            warn!(session_id = %session_id, error = %err, "Failed to fetch session calculations");
            error_response(err)
        }
    }
}

/// Handler for GET /api/industry-benchmarks.
async fn list_benchmarks_handler(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(rejection),
    };

    match state.benchmarks().list_benchmarks(query.year).await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to list benchmarks");
            error_response(err)
        }
    }
}

/// Handler for GET /api/industry-benchmarks/:industry.
async fn get_benchmark_handler(
    State(state): State<AppState>,
    Path(industry): Path<String>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(rejection),
    };

    match state.benchmarks().get_benchmark(&industry, query.year).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => {
            let year = query.year.unwrap_or(state.benchmarks().default_year());
            error_response(ApiErrorResponse::not_found(format!(
                "No benchmark for {} in {}",
                industry, year
            )))
        }
        Err(err) => {
            warn!(industry = %industry, error = %err, "Failed to fetch benchmark");
            error_response(err)
        }
    }
}

/// Handler for GET /api/industry-benchmarks/:industry/compare.
async fn compare_benchmark_handler(
    State(state): State<AppState>,
    Path(industry): Path<String>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(rejection),
    };

    match state
        .benchmarks()
        .compare_to_industry(query.raise, &industry)
        .await
    {
        Ok(comparison) => Json(comparison).into_response(),
        Err(err) => {
            warn!(industry = %industry, error = %err, "Failed to compare with benchmark");
            error_response(err)
        }
    }
}

/// Handler for GET /api/economic-data/inflation.
async fn inflation_handler(State(state): State<AppState>) -> Response {
    Json(inflation_snapshot(state.config())).into_response()
}

/// Handler for GET /api/market-trends.
async fn market_trends_handler() -> Response {
    Json(market_trends()).into_response()
}

/// Handler for GET /api/salary-trends.
async fn salary_trends_handler(query: Result<Query<IndustryQuery>, QueryRejection>) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(rejection),
    };
    Json(salary_trends(query.industry.as_deref())).into_response()
}
