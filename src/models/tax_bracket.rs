//! Progressive income tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the IRPF bracket table, expressed in reference units (BPC).
///
/// A bracket covers `[from_units, to_units)`. The top bracket has no upper
/// bound and leaves `to_units` empty.
///
/// # Example
///
/// ```
/// use salary_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::new(Decimal::from(7), Some(Decimal::from(10)), Decimal::new(10, 2));
/// assert_eq!(bracket.label(), "7 - 10 BPC");
/// assert_eq!(bracket.lower_bound(Decimal::from(6576)), Decimal::from(46032));
/// assert_eq!(bracket.upper_bound(Decimal::from(6576)), Some(Decimal::from(65760)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound in reference units.
    pub from_units: Decimal,
    /// Exclusive upper bound in reference units, `None` for the top bracket.
    #[serde(default)]
    pub to_units: Option<Decimal>,
    /// Marginal rate applied to income inside this bracket, as a fraction.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket from its unit bounds and rate.
    pub fn new(from_units: Decimal, to_units: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            from_units,
            to_units,
            rate,
        }
    }

    /// Lower bound converted to currency.
    pub fn lower_bound(&self, reference_unit: Decimal) -> Decimal {
        self.from_units * reference_unit
    }

    /// Upper bound converted to currency, `None` when unbounded.
    pub fn upper_bound(&self, reference_unit: Decimal) -> Option<Decimal> {
        self.to_units.map(|to| to * reference_unit)
    }

    /// Returns true for the open-ended top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.to_units.is_none()
    }

    /// Human-readable range such as `"10 - 15 BPC"` or `"115 - ∞ BPC"`.
    pub fn label(&self) -> String {
        match self.to_units {
            Some(to) => format!("{} - {} BPC", self.from_units.normalize(), to.normalize()),
            None => format!("{} - ∞ BPC", self.from_units.normalize()),
        }
    }

    /// Rate formatted as a percentage string, e.g. `"24%"`.
    pub fn rate_percentage(&self) -> String {
        format!("{}%", (self.rate * Decimal::ONE_HUNDRED).normalize())
    }
}
