//! Calculation logic for the Salary Engine.
//!
//! This module contains the pure calculation functions that turn a gross
//! monthly salary into a net salary: BPS contributions (retirement, FONASA
//! health fund, FRL labor fund), the progressive IRPF bracket tax, IRPF
//! deductions for dependents, and the orchestration that combines them.

mod contributions;
mod deductions;
mod net_salary;
mod progressive_tax;

pub use contributions::{ContributionBreakdown, compute_contributions, health_rate};
pub use deductions::compute_deductions;
pub use net_salary::{compute_net_salary, taxable_base};
pub use progressive_tax::{ProgressiveTaxResult, compute_progressive_tax};
