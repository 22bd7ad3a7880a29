//! Weighted average mark calculation.
//!
//! This module computes the credit-weighted average mark over a student's
//! core units and locates their capstone mark.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::handbook::{EngineSettings, RuleRepository};
use crate::models::EnrollmentRecord;

use super::credit_selection::select_credit_points;
use super::mark_adjustment::adjust_mark;

/// Offset of the level digit within a unit code, e.g. the 4 in GENG4412.
pub const UNIT_LEVEL_OFFSET: usize = 4;

/// Level digits of units that contribute to the WAM.
pub const CORE_UNIT_LEVELS: [char; 3] = ['3', '4', '5'];

/// Returns the level digit of a unit code, if the code is long enough to
/// carry one.
pub fn unit_level(unit_code: &str) -> Option<char> {
    unit_code.chars().nth(UNIT_LEVEL_OFFSET)
}

/// Returns true when the unit's level digit marks it as core-level.
pub fn is_core_level(unit_code: &str) -> bool {
    unit_level(unit_code).is_some_and(|level| CORE_UNIT_LEVELS.contains(&level))
}

/// The outcome of a WAM calculation for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WamResult {
    /// The weighted average mark rounded to 3 decimal places, or `None`
    /// when no core units contributed.
    pub wam: Option<Decimal>,
    /// Raw mark of the last capstone attempt, if any.
    pub capstone_mark: Option<Decimal>,
    /// Total credit points of the attempts that contributed to the WAM.
    pub core_credit_points: u32,
}

/// Calculates the weighted average mark for one student.
///
/// Each attempt is mark-adjusted and credit-selected; excluded attempts
/// drop out. Of the remainder, only core attempts contribute: level 3, 4,
/// or 5 units that the repository confirms belong to the declared major
/// (any version). The WAM is the credit-weighted mean of adjusted marks,
/// rounded to 3 decimal places; with no contributing credit the WAM is
/// absent rather than a division by zero.
///
/// The capstone mark is read from the raw history, not the filtered
/// attempts: the recorded mark of the last attempt at the designated
/// capstone unit, whatever its grade.
///
/// # Example
///
/// ```no_run
/// use honours_engine::calculation::calculate_wam;
/// use honours_engine::handbook::HandbookLoader;
///
/// let loader = HandbookLoader::load("./config/bh011")?;
/// let result = calculate_wam(
///     "Mechanical Engineering",
///     &[],
///     loader.handbook(),
///     loader.settings(),
/// )?;
/// assert!(result.wam.is_none());
/// # Ok::<(), honours_engine::error::EngineError>(())
/// ```
pub fn calculate_wam(
    major_name: &str,
    enrollments: &[EnrollmentRecord],
    repository: &dyn RuleRepository,
    settings: &EngineSettings,
) -> EngineResult<WamResult> {
    let mut weighted_sum = Decimal::ZERO;
    let mut credit_sum: u32 = 0;

    for record in enrollments {
        let Some(adjusted) = adjust_mark(&record.grade, record.mark) else {
            continue;
        };
        let Some(credit) = select_credit_points(
            Some(adjusted),
            record.enrolled_credit_points,
            record.achievable_credit_points,
        ) else {
            continue;
        };

        if !is_core_level(&record.unit_code) {
            continue;
        }
        if !repository.is_unit_in_major(&record.unit_code, major_name)? {
            continue;
        }

        weighted_sum += adjusted * Decimal::from(credit);
        credit_sum += credit;
    }

    let wam = if credit_sum == 0 {
        None
    } else {
        Some((weighted_sum / Decimal::from(credit_sum)).round_dp(3))
    };

    let capstone_mark = enrollments
        .iter()
        .filter(|r| r.unit_code == settings.capstone_unit)
        .last()
        .map(|r| r.mark);

    Ok(WamResult {
        wam,
        capstone_mark,
        core_credit_points: credit_sum,
    })
}
