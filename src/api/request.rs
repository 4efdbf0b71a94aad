//! Request types for the Salary Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryInput;

/// Request body for the `/calculate` endpoint.
///
/// Only `gross_salary` is required. Decimal fields accept either JSON
/// strings (`"30000.50"`) or numbers.
///
/// # Example
///
/// ```
/// use salary_engine::api::SalaryRequest;
///
/// let request: SalaryRequest = serde_json::from_str(r#"{"gross_salary": 30000}"#).unwrap();
/// assert_eq!(request.children_count, 0);
/// assert!(!request.has_spouse_dependent);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Gross (nominal) monthly salary in pesos.
    pub gross_salary: Decimal,
    /// Number of dependent children.
    #[serde(default)]
    pub children_count: i64,
    /// Whether the spouse is a dependent.
    #[serde(default)]
    pub has_spouse_dependent: bool,
    /// Additional monthly IRPF deductions.
    #[serde(default)]
    pub additional_deductions: Decimal,
}

impl From<SalaryRequest> for SalaryInput {
    fn from(req: SalaryRequest) -> Self {
        SalaryInput {
            gross_salary: req.gross_salary,
            children_count: req.children_count,
            has_spouse_dependent: req.has_spouse_dependent,
            additional_deductions: req.additional_deductions,
        }
    }
}
