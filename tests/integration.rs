//! Integration tests for the Pay Raise Engine HTTP API.
//!
//! This test suite drives the router against the in-memory backend:
//! - Raise calculations in every mode and pay period
//! - Inflation and industry context on the raise endpoint
//! - Stored calculations and session retrieval
//! - Benchmark listing, lookup and comparison
//! - Static market data endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

use payraise_engine::api::{AppState, create_router};
use payraise_engine::config::ConfigLoader;
use payraise_engine::storage::MemStorage;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/payraise.yaml").expect("Failed to load config");
    let storage = Arc::new(MemStorage::new(config.benchmarks()));
    AppState::new(config, storage)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field that the API serializes as a string.
fn field(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal fields are strings"))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

// =============================================================================
// Raise calculation
// =============================================================================

#[tokio::test]
async fn test_percentage_raise_on_annual_salary() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({"currentPay": "50000", "mode": "percentage", "raiseValue": "5"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["newPay"]), decimal("52500"));
    assert_eq!(field(&body["raiseAmount"]), decimal("2500"));
    assert_eq!(field(&body["raisePercentage"]), decimal("5"));
    assert_eq!(body["projections"].as_array().unwrap().len(), 5);
    assert!(body.get("inflation").is_none());
    assert!(body.get("calculationId").is_none());
}

#[tokio::test]
async fn test_numeric_json_values_are_accepted() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({"currentPay": 50000, "mode": "percentage", "raiseValue": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["newPay"]), decimal("52500"));
}

#[tokio::test]
async fn test_amount_raise_on_monthly_pay() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "4000",
            "payPeriod": "monthly",
            "mode": "amount",
            "raiseValue": "200"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["currentAnnual"]), decimal("48000"));
    assert_eq!(field(&body["newPay"]), decimal("4200"));
    assert_eq!(field(&body["raiseAmount"]), decimal("200"));
    assert_eq!(field(&body["raisePercentage"]), decimal("5"));
    assert_eq!(field(&body["annualized"]["annual"]), decimal("50400"));
    // projections are only produced for percentage raises
    assert!(body.get("projections").is_none());
}

#[tokio::test]
async fn test_target_raise_on_hourly_pay() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "20",
            "payPeriod": "hourly",
            "mode": "target",
            "raiseValue": "22",
            "hoursPerWeek": "40"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["currentAnnual"]), decimal("41600"));
    assert_eq!(field(&body["newPay"]), decimal("22"));
    assert_eq!(field(&body["raiseAmount"]), decimal("2"));
    assert_eq!(field(&body["raisePercentage"]), decimal("10"));
    assert_eq!(field(&body["breakdown"]["hourly"]), decimal("2"));
    assert_eq!(field(&body["annualized"]["hourly"]), decimal("22"));
}

#[tokio::test]
async fn test_hourly_without_hours_is_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({"currentPay": "20", "payPeriod": "hourly", "mode": "percentage", "raiseValue": "3"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], "hoursPerWeek");
}

#[tokio::test]
async fn test_inflation_and_industry_context() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "80000",
            "mode": "percentage",
            "raiseValue": "5",
            "includeInflation": true,
            "industry": "Technology"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["realRaisePercentage"]), decimal("1.9"));
    assert_eq!(field(&body["inflation"]["realRaise"]), decimal("1.9"));
    assert_eq!(body["inflation"]["status"], "positive");
    // 5.0 is above the Technology average of 4.2 but under the top quartile
    assert_eq!(body["industryComparison"]["status"], "above");
    assert_eq!(body["industryComparison"]["percentile"], 60);
}

#[tokio::test]
async fn test_unknown_industry_comparison_is_neutral() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "80000",
            "mode": "percentage",
            "raiseValue": "5",
            "industry": "Astronautics"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industryComparison"]["status"], "average");
    assert!(body["industryComparison"].get("percentile").is_none());
}

#[tokio::test]
async fn test_explicit_tax_rate() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "60000",
            "mode": "amount",
            "raiseValue": "3000",
            "includeTaxes": true,
            "taxRate": "25"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["effectiveTaxRate"]), decimal("25"));
    assert_eq!(field(&body["netIncrease"]), decimal("2250"));
}

#[tokio::test]
async fn test_estimated_tax_rate_uses_new_salary() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "78000",
            "mode": "amount",
            "raiseValue": "4000",
            "includeTaxes": true
        }),
    )
    .await;

    // 82000 falls in the 24% bracket
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["effectiveTaxRate"]), decimal("24"));
    assert_eq!(field(&body["netIncrease"]), decimal("3040"));
}

// =============================================================================
// Stored calculations
// =============================================================================

#[tokio::test]
async fn test_raise_with_session_is_stored() {
    let router = create_router_for_test();

    let (status, body) = post(
        router.clone(),
        "/api/raise/calculate",
        json!({
            "currentPay": "50000",
            "mode": "percentage",
            "raiseValue": "4",
            "sessionId": "session-a"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calculationId"], 1);

    let (status, body) = get(router, "/api/calculations/session/session-a").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(field(&rows[0]["currentSalary"]), decimal("50000"));
    assert_eq!(field(&rows[0]["raisePercentage"]), decimal("4"));
    assert!(rows[0]["raiseAmount"].is_null());
}

#[tokio::test]
async fn test_create_calculation_returns_201() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/calculations",
        json!({
            "currentSalary": "65000",
            "targetSalary": "70000",
            "payPeriod": "annual",
            "sessionId": "s-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["sessionId"], "s-1");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_calculation_rejects_two_raise_fields() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/calculations",
        json!({
            "currentSalary": "65000",
            "raisePercentage": "3",
            "raiseAmount": "2000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_calculation_rejects_sub_cent_values() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/calculations",
        json!({"currentSalary": "9999999999.999", "raisePercentage": "999.999"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], "currentSalary");
}

#[tokio::test]
async fn test_overflowing_raise_is_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "10000000000000000000000000000",
            "payPeriod": "monthly",
            "mode": "percentage",
            "raiseValue": "5"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], "currentPay");
}

#[tokio::test]
async fn test_session_lists_only_its_calculations_in_order() {
    let router = create_router_for_test();

    for (salary, session) in [("40000", "mine"), ("41000", "other"), ("42000", "mine")] {
        let (status, _) = post(
            router.clone(),
            "/api/calculations",
            json!({"currentSalary": salary, "sessionId": session}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(router, "/api/calculations/session/mine").await;
    assert_eq!(status, StatusCode::OK);
    let salaries: Vec<Decimal> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| field(&row["currentSalary"]))
        .collect();
    assert_eq!(salaries, vec![decimal("40000"), decimal("42000")]);
}

#[tokio::test]
async fn test_unknown_session_is_empty_list() {
    let (status, body) = get(create_router_for_test(), "/api/calculations/session/nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Benchmarks
// =============================================================================

#[tokio::test]
async fn test_list_benchmarks() {
    let (status, body) = get(create_router_for_test(), "/api/industry-benchmarks").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["industry"], "Technology");
    assert_eq!(rows[0]["year"], 2025);
}

#[tokio::test]
async fn test_list_benchmarks_for_other_year_is_empty() {
    let (status, body) = get(create_router_for_test(), "/api/industry-benchmarks?year=2019").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_benchmark() {
    let (status, body) = get(create_router_for_test(), "/api/industry-benchmarks/Healthcare").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["averageRaise"]), decimal("3.8"));
    assert_eq!(field(&body["medianRaise"]), decimal("3.5"));
    assert_eq!(field(&body["topQuartileRaise"]), decimal("5.5"));
}

#[tokio::test]
async fn test_get_benchmark_not_found() {
    let router = create_router_for_test();

    let (status, body) = get(router.clone(), "/api/industry-benchmarks/Astronautics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = get(router, "/api/industry-benchmarks/Finance?year=2001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_compare_endpoint_ladder() {
    let router = create_router_for_test();
    // Education: median 2.8, average 3.0, top quartile 4.2
    let cases = [
        ("5", "above", 75),
        ("3.5", "above", 60),
        ("2.9", "average", 50),
        ("1", "below", 30),
    ];

    for (raise, expected_status, expected_percentile) in cases {
        let uri = format!("/api/industry-benchmarks/Education/compare?raise={}", raise);
        let (status, body) = get(router.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], expected_status, "raise {}", raise);
        assert_eq!(body["percentile"], expected_percentile, "raise {}", raise);
    }
}

#[tokio::test]
async fn test_compare_requires_raise() {
    let (status, body) = get(
        create_router_for_test(),
        "/api/industry-benchmarks/Retail/compare",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUERY");
}

// =============================================================================
// Market data
// =============================================================================

#[tokio::test]
async fn test_inflation_endpoint_uses_configured_rate() {
    let (status, body) = get(create_router_for_test(), "/api/economic-data/inflation").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["currentCPI"]), decimal("3.1"));
    assert_eq!(body["source"], "Bureau of Labor Statistics");
}

#[tokio::test]
async fn test_market_trends() {
    let (status, body) = get(create_router_for_test(), "/api/market-trends").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["hotIndustries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_salary_trends_default_and_selected() {
    let router = create_router_for_test();

    let (status, body) = get(router.clone(), "/api/salary-trends").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"], "Technology");

    let (status, body) = get(router, "/api/salary-trends?industry=retail").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"], "Retail");
    assert_eq!(body["history"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(create_router_for_test(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_missing_content_type() {
    let (status, body) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/api/raise/calculate")
            .body(Body::from(r#"{"currentPay": "1"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_missing_required_field() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({"currentPay": "50000", "mode": "percentage"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_negative_hours_rejected() {
    let (status, body) = post(
        create_router_for_test(),
        "/api/raise/calculate",
        json!({
            "currentPay": "900",
            "payPeriod": "weekly",
            "mode": "percentage",
            "raiseValue": "2",
            "hoursPerWeek": "-5"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "hoursPerWeek");
}
