//! Grade completion policy.
//!
//! This module defines which grade codes count as a completed unit for
//! eligibility purposes.

/// Grade codes that count as a completed unit.
pub const PASSING_GRADES: [&str; 8] = ["HD", "D", "CR", "P", "UP", "PS", "PA", "AC"];

/// Returns true when the grade counts as a completed unit.
///
/// The set is closed and deliberately narrower than the graded set used
/// for mark adjustment: N and N+ keep their numeric mark for WAM purposes
/// but never count toward completed credit.
///
/// # Examples
///
/// ```
/// use honours_engine::calculation::is_passing_grade;
///
/// assert!(is_passing_grade("HD"));
/// assert!(is_passing_grade("UP"));
/// assert!(!is_passing_grade("N"));
/// assert!(!is_passing_grade("N+"));
/// ```
pub fn is_passing_grade(grade: &str) -> bool {
    PASSING_GRADES.contains(&grade)
}
