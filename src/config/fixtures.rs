//! In-memory copy of the shipped 2025 configuration for unit tests.

use rust_decimal_macros::dec;

use crate::models::TaxBracket;

use super::types::{ContributionRates, FiscalYearConfig, FiscalYearFile, TaxableBaseUplift};

/// Mirrors `config/uy2025`; `loader` tests keep the two in sync.
pub(crate) fn uruguay_2025() -> FiscalYearConfig {
    let fiscal_year = FiscalYearFile {
        fiscal_year: 2025,
        reference_unit: dec!(6576),
        minimum_wage: dec!(23604),
        contribution_rates: ContributionRates {
            retirement: dec!(0.15),
            health_base: dec!(0.045),
            health_reduced: dec!(0.03),
            labor_fund: dec!(0.001),
        },
        health_reduced_threshold_units: dec!(2.5),
        taxable_base_uplift: TaxableBaseUplift {
            threshold_units: dec!(10),
            multiplier: dec!(1.06),
        },
        dependent_deduction_units: dec!(0.5),
    };

    let brackets = vec![
        TaxBracket::new(dec!(0), Some(dec!(7)), dec!(0)),
        TaxBracket::new(dec!(7), Some(dec!(10)), dec!(0.10)),
        TaxBracket::new(dec!(10), Some(dec!(15)), dec!(0.15)),
        TaxBracket::new(dec!(15), Some(dec!(30)), dec!(0.24)),
        TaxBracket::new(dec!(30), Some(dec!(50)), dec!(0.25)),
        TaxBracket::new(dec!(50), Some(dec!(75)), dec!(0.27)),
        TaxBracket::new(dec!(75), Some(dec!(115)), dec!(0.31)),
        TaxBracket::new(dec!(115), None, dec!(0.36)),
    ];

    FiscalYearConfig::new(fiscal_year, brackets)
}
