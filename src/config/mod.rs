//! Configuration loading and management for the Salary Engine.
//!
//! This module provides functionality to load fiscal-year configurations from
//! YAML files: the reference unit (BPC), the minimum wage, contribution rates
//! and the progressive IRPF bracket table. Switching fiscal year means
//! pointing the loader at another directory; no calculation code changes.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uy2025").unwrap();
//! println!("Fiscal year: {}", config.config().fiscal_year());
//! ```

#[cfg(test)]
pub(crate) mod fixtures;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BracketsFile, ContributionRates, FiscalYearConfig, FiscalYearFile, TaxableBaseUplift,
};
