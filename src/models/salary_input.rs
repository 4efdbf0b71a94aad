//! Salary input model.
//!
//! This module defines the [`SalaryInput`] record that every net salary
//! computation starts from, along with its invariant checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The monthly figures declared by a worker.
///
/// Field values are taken as given; call [`SalaryInput::validate`] before
/// trusting them in a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross (nominal) monthly salary in pesos.
    pub gross_salary: Decimal,
    /// Number of dependent children.
    #[serde(default)]
    pub children_count: i64,
    /// Whether the worker has a dependent spouse.
    #[serde(default)]
    pub has_spouse_dependent: bool,
    /// Additional monthly amounts deductible from income tax.
    #[serde(default)]
    pub additional_deductions: Decimal,
}

impl SalaryInput {
    /// Creates an input with no dependents and no additional deductions.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::SalaryInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = SalaryInput::new(Decimal::from(30000));
    /// assert_eq!(input.children_count, 0);
    /// assert!(!input.has_spouse_dependent);
    /// assert_eq!(input.additional_deductions, Decimal::ZERO);
    /// ```
    pub fn new(gross_salary: Decimal) -> Self {
        Self {
            gross_salary,
            children_count: 0,
            has_spouse_dependent: false,
            additional_deductions: Decimal::ZERO,
        }
    }

    /// Checks every field invariant against the given minimum wage.
    ///
    /// The first violated field is reported as [`EngineError::InvalidInput`].
    /// Nothing is corrected silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::SalaryInput;
    /// use rust_decimal::Decimal;
    ///
    /// let minimum_wage = Decimal::from(23604);
    /// assert!(SalaryInput::new(Decimal::from(23605)).validate(minimum_wage).is_ok());
    /// assert!(SalaryInput::new(Decimal::from(23604)).validate(minimum_wage).is_err());
    /// ```
    pub fn validate(&self, minimum_wage: Decimal) -> EngineResult<()> {
        if self.gross_salary <= minimum_wage {
            return Err(EngineError::invalid_input(
                "gross_salary",
                format!(
                    "must be greater than the minimum wage ({}), got {}",
                    minimum_wage.normalize(),
                    self.gross_salary.normalize()
                ),
            ));
        }

        if self.children_count < 0 {
            return Err(EngineError::invalid_input(
                "children_count",
                format!("must be zero or greater, got {}", self.children_count),
            ));
        }

        if u32::try_from(self.children_count).is_err() {
            return Err(EngineError::invalid_input(
                "children_count",
                format!("is too large, got {}", self.children_count),
            ));
        }

        if self.additional_deductions < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "additional_deductions",
                format!(
                    "must be zero or greater, got {}",
                    self.additional_deductions.normalize()
                ),
            ));
        }

        Ok(())
    }

    /// Returns true if the worker declares at least one dependent.
    pub fn has_dependents(&self) -> bool {
        self.children_count > 0 || self.has_spouse_dependent
    }
}
