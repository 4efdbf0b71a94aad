//! Social-security contribution calculation functionality.
//!
//! This module computes the three mandatory BPS payroll contributions:
//! retirement, the FONASA health fund, and the FRL labor-retraining fund.

use rust_decimal::Decimal;

use crate::config::FiscalYearConfig;

/// The contributions withheld from a gross salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionBreakdown {
    /// Retirement contribution.
    pub retirement: Decimal,
    /// FONASA health-fund contribution.
    pub health: Decimal,
    /// FRL labor-retraining fund contribution.
    pub labor_fund: Decimal,
    /// Sum of the three contributions.
    pub total: Decimal,
    /// Health-fund rate that was selected.
    pub health_rate: Decimal,
}

/// Selects the FONASA health-fund rate for a worker.
///
/// Below the reduced-rate threshold (2.5 BPC in 2025), workers with at least
/// one dependent pay the reduced rate and everyone else pays the base rate.
/// At or above the threshold the base rate applies.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::health_rate;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/uy2025").unwrap();
/// let config = loader.config();
///
/// assert_eq!(health_rate(Decimal::from(15000), 1, false, config), Decimal::new(3, 2));
/// assert_eq!(health_rate(Decimal::from(15000), 0, false, config), Decimal::new(45, 3));
/// ```
#[allow(clippy::if_same_then_else)]
pub fn health_rate(
    gross_salary: Decimal,
    children_count: u32,
    has_spouse_dependent: bool,
    config: &FiscalYearConfig,
) -> Decimal {
    let rates = config.contribution_rates();
    let salary_in_units = gross_salary / config.reference_unit();
    let has_dependents = children_count > 0 || has_spouse_dependent;

    if salary_in_units < config.health_reduced_threshold_units() {
        return if has_dependents {
            rates.health_reduced
        } else {
            rates.health_base
        };
    }

    // Both branches currently pay the base rate. They are kept apart so a
    // dependent-specific rate above the threshold only needs a config change here.
    if has_dependents {
        rates.health_base
    } else {
        rates.health_base
    }
}

/// Computes the retirement, health and labor-fund contributions.
///
/// # Arguments
///
/// * `gross_salary` - Gross monthly salary in pesos
/// * `children_count` - Number of dependent children
/// * `has_spouse_dependent` - Whether the spouse is a dependent
/// * `config` - Active fiscal-year configuration
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_contributions;
/// use salary_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("config/uy2025").unwrap();
/// let result = compute_contributions(Decimal::from(30000), 0, false, loader.config());
///
/// assert_eq!(result.retirement, Decimal::from(4500));
/// assert_eq!(result.health, Decimal::from(1350));
/// assert_eq!(result.labor_fund, Decimal::from(30));
/// assert_eq!(result.total, Decimal::from(5880));
/// ```
pub fn compute_contributions(
    gross_salary: Decimal,
    children_count: u32,
    has_spouse_dependent: bool,
    config: &FiscalYearConfig,
) -> ContributionBreakdown {
    let rates = config.contribution_rates();

    let retirement = gross_salary * rates.retirement;
    let labor_fund = gross_salary * rates.labor_fund;
    let health_rate = health_rate(gross_salary, children_count, has_spouse_dependent, config);
    let health = gross_salary * health_rate;

    ContributionBreakdown {
        retirement,
        health,
        labor_fund,
        total: retirement + health + labor_fund,
        health_rate,
    }
}
