//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::compute_net_salary;
use crate::models::SalaryInput;

use super::request::SalaryRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, InfoResponse, ServiceInfo};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/info", get(info_handler))
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Handler for GET / endpoint.
async fn root_handler(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(state.config()))
}

/// Handler for GET /info endpoint.
///
/// Dumps the reference unit, contribution rates and bracket table in force.
async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::new(state.config()))
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.config()))
}

async fn not_found_handler(uri: Uri) -> Response {
    json_response(StatusCode::NOT_FOUND, ApiError::not_found(uri.path()))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a salary request and returns the itemized net salary computation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let input: SalaryInput = request.into();

    let start_time = Instant::now();
    match compute_net_salary(&input, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = %result.details.gross_salary,
                net_salary = %result.details.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            if err.is_client_error() {
                warn!(correlation_id = %correlation_id, error = %err, "Invalid salary input");
            } else {
                error!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            }
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
