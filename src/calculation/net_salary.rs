//! Net salary computation.
//!
//! This module ties the contribution, progressive tax and deduction
//! calculators together into the itemized [`ComputationResult`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::FiscalYearConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationDetails, ComputationResult, SalaryInput};

use super::contributions::compute_contributions;
use super::deductions::compute_deductions;
use super::progressive_tax::compute_progressive_tax;

/// Computes the IRPF taxable base from the gross salary.
///
/// Above the uplift threshold (strictly more than 10 BPC in 2025) the base
/// is `gross * 1.06 - contributions`; otherwise `gross - contributions`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::taxable_base;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/uy2025").unwrap();
/// let config = loader.config();
///
/// // 10 BPC exactly: no uplift
/// assert_eq!(taxable_base(Decimal::from(65760), Decimal::ZERO, config), Decimal::from(65760));
/// ```
pub fn taxable_base(
    gross_salary: Decimal,
    total_contributions: Decimal,
    config: &FiscalYearConfig,
) -> Decimal {
    let uplift = config.taxable_base_uplift();
    let salary_in_units = gross_salary / config.reference_unit();

    if salary_in_units > uplift.threshold_units {
        gross_salary * uplift.multiplier - total_contributions
    } else {
        gross_salary - total_contributions
    }
}

/// Computes the net monthly salary and its full itemized breakdown.
///
/// The input is validated first; an invalid field yields
/// [`EngineError::InvalidInput`] and nothing is computed. Amounts too large
/// to represent yield [`EngineError::CalculationError`]. No partial result
/// is ever returned.
///
/// # Arguments
///
/// * `input` - The worker's declared salary and dependents
/// * `config` - Active fiscal-year configuration
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_net_salary;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/uy2025").unwrap();
/// let result = compute_net_salary(&SalaryInput::new(Decimal::from(30000)), loader.config()).unwrap();
///
/// assert_eq!(result.details.net_salary, Decimal::from(24120));
/// assert_eq!(result.discount_percentage, Decimal::new(196, 1));
/// ```
pub fn compute_net_salary(
    input: &SalaryInput,
    config: &FiscalYearConfig,
) -> EngineResult<ComputationResult> {
    input.validate(config.minimum_wage())?;

    let children_count = u32::try_from(input.children_count).map_err(|_| {
        EngineError::invalid_input(
            "children_count",
            format!("is out of range, got {}", input.children_count),
        )
    })?;
    ensure_representable(input, children_count, config)?;

    let gross_salary = input.gross_salary;

    let contributions = compute_contributions(
        gross_salary,
        children_count,
        input.has_spouse_dependent,
        config,
    );
    debug!(
        retirement = %contributions.retirement,
        health = %contributions.health,
        labor_fund = %contributions.labor_fund,
        health_rate = %contributions.health_rate,
        "Computed contributions"
    );

    let taxable_base = taxable_base(gross_salary, contributions.total, config);
    let income_tax =
        compute_progressive_tax(taxable_base, config.brackets(), config.reference_unit());

    let total_deductions = compute_deductions(
        children_count,
        input.has_spouse_dependent,
        input.additional_deductions,
        config,
    );

    let net_income_tax = (income_tax.total_tax - total_deductions).max(Decimal::ZERO);
    let net_salary = gross_salary - contributions.total - net_income_tax;
    let discount_percentage = discount_percentage(gross_salary, net_salary)?;

    debug!(
        taxable_base = %taxable_base,
        gross_income_tax = %income_tax.total_tax,
        total_deductions = %total_deductions,
        net_income_tax = %net_income_tax,
        net_salary = %net_salary,
        "Computed net salary"
    );

    Ok(ComputationResult {
        details: CalculationDetails {
            gross_salary,
            retirement_contribution: contributions.retirement,
            health_contribution: contributions.health,
            labor_fund_contribution: contributions.labor_fund,
            total_contributions: contributions.total,
            taxable_base,
            gross_income_tax: income_tax.total_tax,
            total_deductions,
            net_income_tax,
            net_salary,
            health_rate_applied: contributions.health_rate,
            tax_breakdown: income_tax.breakdown,
        },
        discount_percentage,
        reference_unit_used: config.reference_unit(),
    })
}

/// Share of the gross salary withheld, rounded to 2 places (half to even).
fn discount_percentage(gross_salary: Decimal, net_salary: Decimal) -> EngineResult<Decimal> {
    (gross_salary - net_salary)
        .checked_div(gross_salary)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percentage| percentage.round_dp(2))
        .ok_or_else(|| overflow("discount percentage"))
}

/// Rejects inputs whose uplifted salary or deduction total cannot be represented.
///
/// Every other figure is bounded by one of these two.
fn ensure_representable(
    input: &SalaryInput,
    children_count: u32,
    config: &FiscalYearConfig,
) -> EngineResult<()> {
    input
        .gross_salary
        .checked_mul(config.taxable_base_uplift().multiplier)
        .ok_or_else(|| overflow("taxable base"))?;

    config
        .dependent_deduction_units()
        .checked_mul(config.reference_unit())
        .and_then(|per_dependent| {
            per_dependent
                .checked_mul(Decimal::from(children_count))
                .and_then(|children| children.checked_add(per_dependent))
        })
        .and_then(|dependents| dependents.checked_add(input.additional_deductions))
        .ok_or_else(|| overflow("deductions"))?;

    Ok(())
}

fn overflow(what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("arithmetic overflow while computing {}", what),
    }
}
