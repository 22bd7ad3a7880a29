//! HTTP API module for the honours evaluation engine.
//!
//! This module provides the REST API endpoint for generating graduation
//! and honours reports from student enrollment histories.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EnrollmentRequest, ReportRequest};
pub use response::ApiError;
pub use state::AppState;
