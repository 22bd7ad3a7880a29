//! Calculation logic for the Honours Evaluation Engine.
//!
//! This module contains all the calculation functions for evaluating a
//! student's record, including mark adjustment by grade, credit point
//! selection, the grade completion policy, graduation rule eligibility
//! across major versions, weighted average mark calculation over core
//! units, honours classification, and per-student report assembly.

mod credit_selection;
mod eligibility;
mod grade_policy;
mod honours;
mod mark_adjustment;
mod report;
mod wam;

pub use credit_selection::{pass_mark, select_credit_points};
pub use eligibility::{EligibilityResult, EligibilityStatus, evaluate_eligibility};
pub use grade_policy::{PASSING_GRADES, is_passing_grade};
pub use honours::{
    classify_honours, first_class_threshold, lower_second_threshold, upper_second_threshold,
};
pub use mark_adjustment::{
    GRADED_OUTCOMES, adjust_mark, failed_component_mark, supplementary_pass_mark,
};
pub use report::compute_report;
pub use wam::{
    CORE_UNIT_LEVELS, UNIT_LEVEL_OFFSET, WamResult, calculate_wam, is_core_level, unit_level,
};
