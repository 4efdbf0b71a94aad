//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fiscal-year
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxBracket;

use super::types::{BracketsFile, ContributionRates, FiscalYearConfig, FiscalYearFile};

/// Loads and provides access to a fiscal-year configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes the resulting [`FiscalYearConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/uy2025/
/// ├── fiscal_year.yaml   # Reference unit, minimum wage, rates, thresholds
/// └── brackets.yaml      # Progressive IRPF bracket table
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uy2025").unwrap();
/// println!("Reference unit: {}", loader.config().reference_unit());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FiscalYearConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/uy2025")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The values describe an unusable fiscal year (see [`ConfigLoader::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/uy2025")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let fiscal_year = Self::load_yaml::<FiscalYearFile>(&path.join("fiscal_year.yaml"))?;
        let brackets = Self::load_yaml::<BracketsFile>(&path.join("brackets.yaml"))?;

        Self::from_config(FiscalYearConfig::new(fiscal_year, brackets.brackets))
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: FiscalYearConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that a configuration can drive the calculators.
    ///
    /// The reference unit must be positive, the minimum wage non-negative,
    /// every rate a fraction in [0, 1] and the uplift multiplier at least 1.
    /// The bracket table must start at 0, be contiguous and ascending, and
    /// end with exactly one unbounded bracket.
    pub fn validate(config: &FiscalYearConfig) -> EngineResult<()> {
        if config.reference_unit() <= Decimal::ZERO {
            return Err(invalid("reference_unit must be positive"));
        }
        if config.minimum_wage() < Decimal::ZERO {
            return Err(invalid("minimum_wage must not be negative"));
        }

        let ContributionRates {
            retirement,
            health_base,
            health_reduced,
            labor_fund,
        } = config.contribution_rates();
        for (name, rate) in [
            ("contribution_rates.retirement", retirement),
            ("contribution_rates.health_base", health_base),
            ("contribution_rates.health_reduced", health_reduced),
            ("contribution_rates.labor_fund", labor_fund),
        ] {
            check_fraction(name, *rate)?;
        }

        if config.health_reduced_threshold_units() < Decimal::ZERO {
            return Err(invalid("health_reduced_threshold_units must not be negative"));
        }
        if config.taxable_base_uplift().threshold_units < Decimal::ZERO {
            return Err(invalid("taxable_base_uplift.threshold_units must not be negative"));
        }
        if config.taxable_base_uplift().multiplier < Decimal::ONE {
            return Err(invalid("taxable_base_uplift.multiplier must be at least 1"));
        }
        if config.dependent_deduction_units() < Decimal::ZERO {
            return Err(invalid("dependent_deduction_units must not be negative"));
        }

        Self::validate_brackets(config.brackets())
    }

    fn validate_brackets(brackets: &[TaxBracket]) -> EngineResult<()> {
        let Some(first) = brackets.first() else {
            return Err(invalid("bracket table is empty"));
        };
        if !first.from_units.is_zero() {
            return Err(invalid(format!(
                "first bracket must start at 0, starts at {}",
                first.from_units.normalize()
            )));
        }

        let last_index = brackets.len() - 1;
        let mut expected_start = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            check_fraction(&format!("brackets[{}].rate", index), bracket.rate)?;

            if bracket.from_units != expected_start {
                return Err(invalid(format!(
                    "bracket {} starts at {} but the previous bracket ends at {}",
                    index,
                    bracket.from_units.normalize(),
                    expected_start.normalize()
                )));
            }

            match bracket.to_units {
                Some(to) if to <= bracket.from_units => {
                    return Err(invalid(format!(
                        "bracket {} has an upper bound ({}) not above its lower bound ({})",
                        index,
                        to.normalize(),
                        bracket.from_units.normalize()
                    )));
                }
                Some(_) if index == last_index => {
                    return Err(invalid("last bracket must be unbounded"));
                }
                Some(to) => expected_start = to,
                None if index != last_index => {
                    return Err(invalid(format!(
                        "only the last bracket may be unbounded, bracket {} is unbounded",
                        index
                    )));
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Returns the underlying fiscal-year configuration.
    pub fn config(&self) -> &FiscalYearConfig {
        &self.config
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}

fn check_fraction(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(format!(
            "{} must be between 0 and 1, got {}",
            name,
            rate.normalize()
        )));
    }
    Ok(())
}
