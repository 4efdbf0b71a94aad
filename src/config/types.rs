//! Configuration types for a fiscal year.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// Payroll contribution rates, as fractions of the gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Retirement contribution rate.
    pub retirement: Decimal,
    /// Standard FONASA health-fund rate.
    pub health_base: Decimal,
    /// Reduced FONASA rate for low earners with dependents.
    pub health_reduced: Decimal,
    /// FRL labor-retraining fund rate.
    pub labor_fund: Decimal,
}

/// Notional uplift of the income tax base for high earners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableBaseUplift {
    /// Salary, in reference units, strictly above which the uplift applies.
    pub threshold_units: Decimal,
    /// Multiplier applied to the gross salary (e.g. 1.06).
    pub multiplier: Decimal,
}

/// Contents of `fiscal_year.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearFile {
    /// The fiscal year these values apply to.
    pub fiscal_year: i32,
    /// The reference unit (BPC) in pesos.
    pub reference_unit: Decimal,
    /// Legal minimum monthly wage in pesos.
    pub minimum_wage: Decimal,
    /// Payroll contribution rates.
    pub contribution_rates: ContributionRates,
    /// Salary, in reference units, below which the reduced health rate may apply.
    pub health_reduced_threshold_units: Decimal,
    /// Taxable base uplift rule.
    pub taxable_base_uplift: TaxableBaseUplift,
    /// Deduction per dependent, in reference units.
    pub dependent_deduction_units: Decimal,
}

/// Contents of `brackets.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketsFile {
    /// The ordered IRPF bracket table.
    pub brackets: Vec<TaxBracket>,
}

/// The complete configuration of one fiscal year.
///
/// Aggregates `fiscal_year.yaml` and `brackets.yaml`. Built once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYearConfig {
    fiscal_year: i32,
    reference_unit: Decimal,
    minimum_wage: Decimal,
    contribution_rates: ContributionRates,
    health_reduced_threshold_units: Decimal,
    taxable_base_uplift: TaxableBaseUplift,
    dependent_deduction_units: Decimal,
    brackets: Vec<TaxBracket>,
}

impl FiscalYearConfig {
    /// Creates a new FiscalYearConfig from its component parts.
    pub fn new(fiscal_year: FiscalYearFile, brackets: Vec<TaxBracket>) -> Self {
        Self {
            fiscal_year: fiscal_year.fiscal_year,
            reference_unit: fiscal_year.reference_unit,
            minimum_wage: fiscal_year.minimum_wage,
            contribution_rates: fiscal_year.contribution_rates,
            health_reduced_threshold_units: fiscal_year.health_reduced_threshold_units,
            taxable_base_uplift: fiscal_year.taxable_base_uplift,
            dependent_deduction_units: fiscal_year.dependent_deduction_units,
            brackets,
        }
    }

    /// Returns the fiscal year.
    pub fn fiscal_year(&self) -> i32 {
        self.fiscal_year
    }

    /// Returns the reference unit (BPC).
    pub fn reference_unit(&self) -> Decimal {
        self.reference_unit
    }

    /// Returns the minimum wage.
    pub fn minimum_wage(&self) -> Decimal {
        self.minimum_wage
    }

    /// Returns the contribution rates.
    pub fn contribution_rates(&self) -> &ContributionRates {
        &self.contribution_rates
    }

    /// Returns the reduced health rate threshold in reference units.
    pub fn health_reduced_threshold_units(&self) -> Decimal {
        self.health_reduced_threshold_units
    }

    /// Returns the taxable base uplift rule.
    pub fn taxable_base_uplift(&self) -> &TaxableBaseUplift {
        &self.taxable_base_uplift
    }

    /// Returns the per-dependent deduction in reference units.
    pub fn dependent_deduction_units(&self) -> Decimal {
        self.dependent_deduction_units
    }

    /// Returns the bracket table in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}
