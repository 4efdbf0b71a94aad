//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for computing Uruguayan net
//! salaries and inspecting the fiscal-year configuration in force.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SalaryRequest;
pub use response::{
    ApiError, ApiErrorResponse, BracketInfo, EndpointInfo, HealthResponse, InfoResponse,
    RatesInfo, ServiceInfo,
};
pub use state::AppState;
