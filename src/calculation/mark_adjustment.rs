//! Mark adjustment for aggregate calculations.
//!
//! This module maps a (grade, mark) pair onto the numeric mark that takes
//! part in credit and WAM aggregates, or excludes the attempt entirely.

use rust_decimal::Decimal;

/// Grades whose recorded mark is used unchanged.
pub const GRADED_OUTCOMES: [&str; 6] = ["N", "N+", "P", "CR", "D", "HD"];

/// Returns the mark substituted for a supplementary pass (the bare pass
/// mark of 50).
pub fn supplementary_pass_mark() -> Decimal {
    Decimal::from(50)
}

/// Returns the mark substituted for a failed-component outcome (capped
/// at 48).
pub fn failed_component_mark() -> Decimal {
    Decimal::from(48)
}

/// Adjusts a recorded mark according to its grade.
///
/// Three outcomes carry a fixed substituted mark: `FN` (did not complete)
/// records zero, `FC` (failed a component) is capped at 48, and `PS`
/// (supplementary pass) is recorded as 50 regardless of the raw mark. The
/// six graded outcomes in [`GRADED_OUTCOMES`] keep the recorded mark. Any
/// other grade is excluded: the attempt takes no part in any aggregate.
///
/// # Arguments
///
/// * `grade` - The grade code of the attempt
/// * `mark` - The recorded numeric mark
///
/// # Returns
///
/// The adjusted mark, or `None` when the attempt is excluded.
///
/// # Examples
///
/// ```
/// use honours_engine::calculation::adjust_mark;
/// use rust_decimal::Decimal;
///
/// assert_eq!(adjust_mark("FN", Decimal::from(37)), Some(Decimal::ZERO));
/// assert_eq!(adjust_mark("PS", Decimal::from(46)), Some(Decimal::from(50)));
/// assert_eq!(adjust_mark("HD", Decimal::from(91)), Some(Decimal::from(91)));
/// assert_eq!(adjust_mark("UP", Decimal::ZERO), None);
/// ```
pub fn adjust_mark(grade: &str, mark: Decimal) -> Option<Decimal> {
    match grade {
        "FN" => Some(Decimal::ZERO),
        "FC" => Some(failed_component_mark()),
        "PS" => Some(supplementary_pass_mark()),
        g if GRADED_OUTCOMES.contains(&g) => Some(mark),
        _ => None,
    }
}
