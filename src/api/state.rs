//! Application state for the Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, FiscalYearConfig};

/// Shared application state.
///
/// Holds the fiscal-year configuration loaded at startup. It is read-only,
/// so handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded fiscal-year configuration.
    loader: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Returns the active fiscal-year configuration.
    pub fn config(&self) -> &FiscalYearConfig {
        self.loader.config()
    }
}
