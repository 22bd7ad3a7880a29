//! Enrollment record model.
//!
//! This module defines the EnrollmentRecord struct, one row of a student's
//! academic history as supplied by the record source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One unit attempt in a student's enrollment history.
///
/// A student appears once per (person, unit) attempt; repeated attempts at
/// the same unit appear as separate records in input order. All fields are
/// read-only snapshots for a single evaluation run.
///
/// # Example
///
/// ```
/// use honours_engine::models::EnrollmentRecord;
/// use rust_decimal::Decimal;
///
/// let record = EnrollmentRecord {
///     person_id: 23001000,
///     surname: "Robert".to_string(),
///     given_names: "Alban".to_string(),
///     course_code: "BH011".to_string(),
///     course_title: "Bachelor of Engineering (Honours)".to_string(),
///     major_deg: "Mechanical Engineering".to_string(),
///     unit_code: "GENG4412".to_string(),
///     grade: "HD".to_string(),
///     mark: Decimal::from(82),
///     enrolled_credit_points: 6,
///     achievable_credit_points: 6,
/// };
/// assert_eq!(record.unit_code, "GENG4412");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Student identifier; report rows are ordered by this value.
    pub person_id: u64,
    /// Family name as recorded on this row.
    pub surname: String,
    /// Given names as recorded on this row.
    pub given_names: String,
    /// Course the attempt was taken under.
    pub course_code: String,
    /// Human-readable course title.
    pub course_title: String,
    /// Declared major name; resolved against the handbook by name.
    pub major_deg: String,
    /// Unit code for the attempt, e.g. `GENG4412`.
    pub unit_code: String,
    /// Grade code; an open set, unrecognized codes are excluded from
    /// aggregates rather than rejected.
    pub grade: String,
    /// Numeric mark for the attempt.
    pub mark: Decimal,
    /// Credit points the student was enrolled in for this attempt.
    pub enrolled_credit_points: u32,
    /// Credit points achievable on passing this attempt.
    pub achievable_credit_points: u32,
}
