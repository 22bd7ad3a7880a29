//! Degree Eligibility and Honours Evaluation Engine
//!
//! This crate evaluates engineering students' enrollment histories against
//! handbook degree rules, computing graduation eligibility, the weighted
//! average mark (WAM) over core units, and the honours classification.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod handbook;
pub mod models;
