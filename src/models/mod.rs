//! Core data models for the Honours Evaluation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod enrollment;
mod report;

pub use enrollment::EnrollmentRecord;
pub use report::{EvaluationReport, HonoursClass, ReportRow, YesNo};
