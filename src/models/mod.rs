//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod computation_result;
mod salary_input;
mod tax_bracket;

pub use computation_result::{BracketContribution, CalculationDetails, ComputationResult};
pub use salary_input::SalaryInput;
pub use tax_bracket::TaxBracket;
