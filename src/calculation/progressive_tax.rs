//! Progressive (marginal) income tax calculation functionality.
//!
//! This module applies the IRPF bracket table to a taxable base. Each
//! bracket's rate applies only to the slice of income inside that bracket,
//! never to the whole base.

use rust_decimal::Decimal;

use crate::models::{BracketContribution, TaxBracket};

/// The result of applying the bracket table to a taxable base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTaxResult {
    /// Tax owed across all brackets.
    pub total_tax: Decimal,
    /// One entry per bracket that received a positive slice, ascending.
    pub breakdown: Vec<BracketContribution>,
}

impl ProgressiveTaxResult {
    fn zero() -> Self {
        Self {
            total_tax: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }
}

/// Computes progressive income tax on `taxable_base`.
///
/// Bracket bounds are converted from reference units to currency, then the
/// base is consumed bracket by bracket in ascending order. A bracket only
/// participates when the base strictly exceeds its lower bound, and the walk
/// stops as soon as nothing remains, so brackets above the base never appear
/// in the breakdown. A base of zero or less yields zero tax and an empty
/// breakdown.
///
/// # Arguments
///
/// * `taxable_base` - The income tax base in pesos
/// * `brackets` - Ascending, contiguous bracket table in reference units
/// * `reference_unit` - Value of one reference unit (BPC) in pesos
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_progressive_tax;
/// use salary_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let brackets = vec![
///     TaxBracket::new(Decimal::ZERO, Some(Decimal::from(7)), Decimal::ZERO),
///     TaxBracket::new(Decimal::from(7), None, Decimal::new(10, 2)),
/// ];
///
/// // 7 BPC = 46032 untaxed, the remaining 3968 taxed at 10%
/// let result = compute_progressive_tax(Decimal::from(50000), &brackets, Decimal::from(6576));
/// assert_eq!(result.total_tax, Decimal::new(3968, 1));
/// assert_eq!(result.breakdown.len(), 2);
/// ```
pub fn compute_progressive_tax(
    taxable_base: Decimal,
    brackets: &[TaxBracket],
    reference_unit: Decimal,
) -> ProgressiveTaxResult {
    if taxable_base <= Decimal::ZERO {
        return ProgressiveTaxResult::zero();
    }

    let mut result = ProgressiveTaxResult::zero();
    let mut remaining = taxable_base;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let lower = bracket.lower_bound(reference_unit);
        if taxable_base <= lower {
            continue;
        }

        let taxed_amount = match bracket.upper_bound(reference_unit) {
            Some(upper) => remaining.min(upper - lower),
            None => remaining,
        };

        if taxed_amount > Decimal::ZERO {
            let tax = taxed_amount * bracket.rate;
            result.total_tax += tax;
            result.breakdown.push(BracketContribution {
                label: bracket.label(),
                taxed_amount,
                rate: bracket.rate,
                tax,
            });
            remaining -= taxed_amount;
        }
    }

    result
}
