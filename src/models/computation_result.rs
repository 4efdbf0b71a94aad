//! Computation result models for the Salary Engine.
//!
//! This module contains the [`ComputationResult`] type and its associated
//! structures that capture every figure of a net salary computation,
//! from contributions through the per-bracket income tax breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income taxed inside a single IRPF bracket.
///
/// Only brackets that received a positive slice of the taxable base produce
/// an entry.
///
/// # Example
///
/// ```
/// use salary_engine::models::BracketContribution;
/// use rust_decimal::Decimal;
///
/// let entry = BracketContribution {
///     label: "7 - 10 BPC".to_string(),
///     taxed_amount: Decimal::from(19728),
///     rate: Decimal::new(10, 2),
///     tax: Decimal::new(19728, 1),
/// };
/// assert_eq!(entry.taxed_amount * entry.rate, entry.tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    /// The bracket range, e.g. `"7 - 10 BPC"`.
    pub label: String,
    /// Portion of the taxable base that falls inside this bracket.
    pub taxed_amount: Decimal,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Tax owed for this slice (`taxed_amount * rate`).
    pub tax: Decimal,
}

/// Every intermediate figure of a net salary computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// Gross (nominal) monthly salary.
    pub gross_salary: Decimal,
    /// Retirement contribution.
    pub retirement_contribution: Decimal,
    /// FONASA health-fund contribution.
    pub health_contribution: Decimal,
    /// FRL labor-retraining fund contribution.
    pub labor_fund_contribution: Decimal,
    /// Sum of the three contributions.
    pub total_contributions: Decimal,
    /// Base the progressive income tax is applied to.
    pub taxable_base: Decimal,
    /// Income tax before deductions.
    pub gross_income_tax: Decimal,
    /// Allowable deductions against the income tax.
    pub total_deductions: Decimal,
    /// Income tax after deductions, never negative.
    pub net_income_tax: Decimal,
    /// Take-home monthly salary.
    pub net_salary: Decimal,
    /// Health-fund rate that was applied.
    pub health_rate_applied: Decimal,
    /// Per-bracket income tax breakdown, in ascending bracket order.
    pub tax_breakdown: Vec<BracketContribution>,
}

/// The complete result of a net salary computation.
///
/// Every field is derived from the salary input and the active fiscal-year
/// configuration; identical inputs always yield identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// Itemized computation.
    pub details: CalculationDetails,
    /// Share of the gross salary withheld, as a percentage rounded to 2 places.
    pub discount_percentage: Decimal,
    /// Reference unit (BPC) the computation used.
    pub reference_unit_used: Decimal,
}

impl ComputationResult {
    /// Sum of the income slices across the bracket breakdown.
    pub fn taxed_total(&self) -> Decimal {
        self.details
            .tax_breakdown
            .iter()
            .map(|entry| entry.taxed_amount)
            .sum()
    }
}
