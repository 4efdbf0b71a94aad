//! IRPF deduction calculation functionality.

use rust_decimal::Decimal;

use crate::config::FiscalYearConfig;

/// Computes the deductions allowed against the gross income tax.
///
/// Each child and a dependent spouse deduct half a reference unit
/// (`dependent_deduction_units` BPC) each; additional declared deductions
/// are added as-is.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_deductions;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/uy2025").unwrap();
///
/// // 2 children + spouse = 1.5 BPC = 9864, plus 500 declared
/// let total = compute_deductions(2, true, Decimal::from(500), loader.config());
/// assert_eq!(total, Decimal::from(10364));
/// ```
pub fn compute_deductions(
    children_count: u32,
    has_spouse_dependent: bool,
    additional_deductions: Decimal,
    config: &FiscalYearConfig,
) -> Decimal {
    let per_dependent = config.dependent_deduction_units() * config.reference_unit();

    let children = Decimal::from(children_count) * per_dependent;
    let spouse = if has_spouse_dependent {
        per_dependent
    } else {
        Decimal::ZERO
    };

    children + spouse + additional_deductions
}
