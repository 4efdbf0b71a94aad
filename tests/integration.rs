//! Integration tests for the Salary Engine HTTP API.
//!
//! This test suite covers all calculation scenarios including:
//! - Earners inside the exempt IRPF bracket
//! - Earners crossing into several brackets
//! - The 10 BPC taxable base uplift boundary
//! - Dependent and additional deductions, including deductions above the tax
//! - Minimum wage boundary validation
//! - Informational and health endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/uy2025").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
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

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

fn create_request(gross: &str, children: i64, spouse: bool, additional: &str) -> Value {
    json!({
        "gross_salary": gross,
        "children_count": children,
        "has_spouse_dependent": spouse,
        "additional_deductions": additional
    })
}

fn field(result: &Value, name: &str) -> Decimal {
    let raw = result["details"][name]
        .as_str()
        .unwrap_or_else(|| panic!("details.{} missing or not a string", name));
    decimal(raw)
}

fn assert_field(result: &Value, name: &str, expected: &str) {
    let actual = field(result, name);
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} {}, got {}",
        name,
        expected,
        actual
    );
}

fn breakdown(result: &Value) -> &Vec<Value> {
    result["details"]["tax_breakdown"].as_array().unwrap()
}

// =============================================================================
// Exempt bracket
// =============================================================================

#[tokio::test]
async fn test_30000_without_dependents() {
    let (status, result) =
        post_calculate(create_router_for_test(), create_request("30000", 0, false, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "gross_salary", "30000");
    assert_field(&result, "retirement_contribution", "4500");
    assert_field(&result, "health_contribution", "1350");
    assert_field(&result, "labor_fund_contribution", "30");
    assert_field(&result, "total_contributions", "5880");
    assert_field(&result, "taxable_base", "24120");
    assert_field(&result, "gross_income_tax", "0");
    assert_field(&result, "total_deductions", "0");
    assert_field(&result, "net_income_tax", "0");
    assert_field(&result, "net_salary", "24120");
    assert_field(&result, "health_rate_applied", "0.045");

    assert_eq!(decimal(result["discount_percentage"].as_str().unwrap()), decimal("19.6"));
    assert_eq!(decimal(result["reference_unit_used"].as_str().unwrap()), decimal("6576"));

    let brackets = breakdown(&result);
    assert_eq!(brackets.len(), 1);
    assert_eq!(brackets[0]["label"], "0 - 7 BPC");
}

#[tokio::test]
async fn test_numeric_json_salary_is_accepted() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_salary": 30000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "net_salary", "24120");
}

// =============================================================================
// Multiple brackets and uplift
// =============================================================================

#[tokio::test]
async fn test_100000_spans_three_brackets_with_uplift() {
    let (status, result) =
        post_calculate(create_router_for_test(), create_request("100000", 0, false, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "total_contributions", "19600");
    assert_field(&result, "taxable_base", "86400");
    assert_field(&result, "gross_income_tax", "5068.8");
    assert_field(&result, "net_income_tax", "5068.8");
    assert_field(&result, "net_salary", "75331.2");
    assert_eq!(decimal(result["discount_percentage"].as_str().unwrap()), decimal("24.67"));

    let brackets = breakdown(&result);
    let labels: Vec<&str> = brackets.iter().map(|b| b["label"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["0 - 7 BPC", "7 - 10 BPC", "10 - 15 BPC"]);
    assert_eq!(decimal(brackets[2]["taxed_amount"].as_str().unwrap()), decimal("20640"));
    assert_eq!(decimal(brackets[2]["tax"].as_str().unwrap()), decimal("3096"));
}

#[tokio::test]
async fn test_exactly_ten_units_has_no_uplift() {
    let (_, result) =
        post_calculate(create_router_for_test(), create_request("65760", 0, false, "0")).await;

    // 65760 - (9864 + 2959.2 + 65.76)
    assert_field(&result, "total_contributions", "12888.96");
    assert_field(&result, "taxable_base", "52871.04");
}

#[tokio::test]
async fn test_just_above_ten_units_is_uplifted() {
    let (_, result) =
        post_calculate(create_router_for_test(), create_request("65761", 0, false, "0")).await;

    let contributions = field(&result, "total_contributions");
    assert_eq!(
        field(&result, "taxable_base"),
        decimal("65761") * decimal("1.06") - contributions
    );
}

#[tokio::test]
async fn test_top_bracket_for_very_high_salary() {
    let (status, result) =
        post_calculate(create_router_for_test(), create_request("1000000", 0, false, "0")).await;

    assert_eq!(status, StatusCode::OK);
    let brackets = breakdown(&result);
    assert_eq!(brackets.len(), 8);
    assert_eq!(brackets[7]["label"], "115 - ∞ BPC");

    let taxed: Decimal = brackets
        .iter()
        .map(|b| decimal(b["taxed_amount"].as_str().unwrap()))
        .sum();
    assert_eq!(taxed, field(&result, "taxable_base"));
}

// =============================================================================
// Deductions
// =============================================================================

#[tokio::test]
async fn test_deductions_exceeding_tax_zero_the_tax() {
    let (_, result) =
        post_calculate(create_router_for_test(), create_request("100000", 2, true, "500")).await;

    assert_field(&result, "total_deductions", "10364");
    assert_field(&result, "gross_income_tax", "5068.8");
    assert_field(&result, "net_income_tax", "0");
    assert_field(&result, "net_salary", "80400");
}

#[tokio::test]
async fn test_one_child_partially_offsets_tax() {
    let (_, result) =
        post_calculate(create_router_for_test(), create_request("100000", 1, false, "0")).await;

    assert_field(&result, "total_deductions", "3288");
    assert_field(&result, "net_income_tax", "1780.8");
    assert_field(&result, "net_salary", "78619.2");
}

#[tokio::test]
async fn test_dependents_do_not_change_health_rate_above_threshold() {
    let (_, result) =
        post_calculate(create_router_for_test(), create_request("30000", 3, true, "0")).await;

    assert_field(&result, "health_rate_applied", "0.045");
    assert_field(&result, "health_contribution", "1350");
}

// =============================================================================
// Validation errors
// =============================================================================

#[tokio::test]
async fn test_salary_at_minimum_wage_is_rejected() {
    let (status, error) =
        post_calculate(create_router_for_test(), create_request("23604", 0, false, "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "gross_salary");
}

#[tokio::test]
async fn test_salary_one_above_minimum_wage_is_accepted() {
    let (status, _) =
        post_calculate(create_router_for_test(), create_request("23605", 0, false, "0")).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_negative_children_are_rejected() {
    let (status, error) =
        post_calculate(create_router_for_test(), create_request("30000", -1, false, "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "children_count");
}

#[tokio::test]
async fn test_negative_additional_deductions_are_rejected() {
    let (status, error) =
        post_calculate(create_router_for_test(), create_request("30000", 0, false, "-10")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"], "additional_deductions");
}

#[tokio::test]
async fn test_unrepresentable_deductions_return_calculation_error() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        create_request("30000", 1, false, &Decimal::MAX.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, error) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"gross_salary\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

// =============================================================================
// Informational endpoints
// =============================================================================

#[tokio::test]
async fn test_root_describes_service() {
    let (status, info) = get(create_router_for_test(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["fiscal_year"], 2025);
    assert_eq!(info["reference_unit"], "6576");
    assert_eq!(info["endpoints"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_info_dumps_rates_and_brackets() {
    let (status, info) = get(create_router_for_test(), "/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(info["reference_unit"].as_str().unwrap()), decimal("6576"));
    assert_eq!(decimal(info["minimum_wage"].as_str().unwrap()), decimal("23604"));
    assert_eq!(decimal(info["rates"]["retirement"].as_str().unwrap()), decimal("0.15"));
    assert_eq!(decimal(info["rates"]["health_base"].as_str().unwrap()), decimal("0.045"));
    assert_eq!(decimal(info["rates"]["labor_fund"].as_str().unwrap()), decimal("0.001"));

    let brackets = info["brackets"].as_array().unwrap();
    assert_eq!(brackets.len(), 8);
    assert_eq!(decimal(brackets[3]["from_amount"].as_str().unwrap()), decimal("98640"));
    assert_eq!(brackets[3]["rate_percentage"], "24%");
    assert!(brackets[7]["to_units"].is_null());
}

#[tokio::test]
async fn test_health_probe() {
    let (status, health) = get(create_router_for_test(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].as_str().is_some());
    assert_eq!(health["reference_unit"], "6576");
}

// =============================================================================
// Determinism
// =============================================================================

#[tokio::test]
async fn test_identical_requests_produce_identical_bodies() {
    let request = create_request("154321.09", 2, true, "750.25");

    let (_, first) = post_calculate(create_router_for_test(), request.clone()).await;
    let (_, second) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(first, second);
}
