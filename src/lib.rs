//! Uruguayan Net Salary Engine
//!
//! This crate computes a worker's net monthly salary from the gross salary,
//! applying the BPS payroll contributions (retirement, FONASA, FRL) and the
//! progressive IRPF income tax, and serves the itemized result over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
