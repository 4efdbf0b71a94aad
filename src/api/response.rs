//! Response types for the Salary Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the bodies of the read-only `/`, `/info` and
//! `/health` endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FiscalYearConfig;
use crate::error::EngineError;
use crate::models::TaxBracket;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a not found error response for an unknown route.
    pub fn not_found(path: &str) -> Self {
        Self::new("NOT_FOUND", format!("No route for {}", path))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}

/// A single endpoint listed by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// HTTP method.
    pub method: String,
    /// Route path.
    pub path: String,
    /// What the endpoint does.
    pub description: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Fiscal year of the loaded configuration.
    pub fiscal_year: i32,
    /// Active reference unit (BPC).
    pub reference_unit: Decimal,
    /// Available endpoints.
    pub endpoints: Vec<EndpointInfo>,
}

impl ServiceInfo {
    /// Describes this service for the given configuration.
    pub fn new(config: &FiscalYearConfig) -> Self {
        let endpoint = |method: &str, path: &str, description: &str| EndpointInfo {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        };

        Self {
            name: "Uruguay Net Salary Calculator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            fiscal_year: config.fiscal_year(),
            reference_unit: config.reference_unit(),
            endpoints: vec![
                endpoint("POST", "/calculate", "Compute the net salary for a gross salary"),
                endpoint("GET", "/info", "Contribution rates and IRPF brackets in force"),
                endpoint("GET", "/health", "Liveness probe"),
            ],
        }
    }
}

/// Contribution rates listed by `GET /info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesInfo {
    /// Retirement contribution rate.
    pub retirement: Decimal,
    /// Standard FONASA health-fund rate.
    pub health_base: Decimal,
    /// Reduced FONASA rate for low earners with dependents.
    pub health_reduced: Decimal,
    /// FRL labor-retraining fund rate.
    pub labor_fund: Decimal,
}

/// One bracket listed by `GET /info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketInfo {
    /// The bracket range, e.g. `"7 - 10 BPC"`.
    pub label: String,
    /// Lower bound in reference units.
    pub from_units: Decimal,
    /// Upper bound in reference units, `null` when unbounded.
    pub to_units: Option<Decimal>,
    /// Lower bound in pesos.
    pub from_amount: Decimal,
    /// Upper bound in pesos, `null` when unbounded.
    pub to_amount: Option<Decimal>,
    /// Marginal rate as a fraction.
    pub rate: Decimal,
    /// Marginal rate as a percentage string, e.g. `"24%"`.
    pub rate_percentage: String,
}

impl BracketInfo {
    fn new(bracket: &TaxBracket, reference_unit: Decimal) -> Self {
        Self {
            label: bracket.label(),
            from_units: bracket.from_units,
            to_units: bracket.to_units,
            from_amount: bracket.lower_bound(reference_unit),
            to_amount: bracket.upper_bound(reference_unit),
            rate: bracket.rate,
            rate_percentage: bracket.rate_percentage(),
        }
    }
}

/// Body of `GET /info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    /// Fiscal year of the loaded configuration.
    pub fiscal_year: i32,
    /// Active reference unit (BPC).
    pub reference_unit: Decimal,
    /// Minimum wage a gross salary must exceed.
    pub minimum_wage: Decimal,
    /// Contribution rates.
    pub rates: RatesInfo,
    /// IRPF bracket table, ascending.
    pub brackets: Vec<BracketInfo>,
}

impl InfoResponse {
    /// Dumps the rates and bracket table of a configuration.
    pub fn new(config: &FiscalYearConfig) -> Self {
        let rates = config.contribution_rates();
        let reference_unit = config.reference_unit();

        Self {
            fiscal_year: config.fiscal_year(),
            reference_unit,
            minimum_wage: config.minimum_wage(),
            rates: RatesInfo {
                retirement: rates.retirement,
                health_base: rates.health_base,
                health_reduced: rates.health_reduced,
                labor_fund: rates.labor_fund,
            },
            brackets: config
                .brackets()
                .iter()
                .map(|bracket| BracketInfo::new(bracket, reference_unit))
                .collect(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// When the probe was answered.
    pub timestamp: DateTime<Utc>,
    /// Active reference unit (BPC).
    pub reference_unit: Decimal,
}

impl HealthResponse {
    /// Builds a healthy probe response stamped with the current time.
    pub fn healthy(config: &FiscalYearConfig) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            reference_unit: config.reference_unit(),
        }
    }
}
