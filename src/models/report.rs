//! Report models for the Honours Evaluation Engine.
//!
//! This module contains the [`ReportRow`] and [`EvaluationReport`] types
//! that capture all outputs of an evaluation run, along with the
//! [`HonoursClass`] band and [`YesNo`] flag types they are built from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An honours classification band.
///
/// Bands are declared best-first, so the derived ordering ranks a better
/// band as less than a worse one. H1 and H2A additionally require a
/// capstone mark at or above their thresholds.
///
/// # Example
///
/// ```
/// use honours_engine::models::HonoursClass;
///
/// assert_eq!(HonoursClass::H2A.to_string(), "H2A");
/// assert!(HonoursClass::H1 < HonoursClass::H3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HonoursClass {
    /// First class honours.
    H1,
    /// Second class honours, division A.
    H2A,
    /// Second class honours, division B.
    H2B,
    /// Third class honours.
    H3,
}

impl fmt::Display for HonoursClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HonoursClass::H1 => "H1",
            HonoursClass::H2A => "H2A",
            HonoursClass::H2B => "H2B",
            HonoursClass::H3 => "H3",
        };
        write!(f, "{}", label)
    }
}

/// A Y/N report flag, serialized exactly as the report columns expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    /// Yes.
    Y,
    /// No.
    N,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Y } else { YesNo::N }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Y => write!(f, "Y"),
            YesNo::N => write!(f, "N"),
        }
    }
}

/// One output row of the eligibility and WAM report.
///
/// Identity fields are taken from the student's most-recently-encountered
/// enrollment row. `wam` and `honours_class` are absent when the student
/// has no core units to average over; `capstone_mark` is absent when the
/// capstone unit was never attempted.
///
/// # Example
///
/// ```
/// use honours_engine::models::{HonoursClass, ReportRow, YesNo};
/// use rust_decimal::Decimal;
///
/// let row = ReportRow {
///     person_id: 23001000,
///     surname: "Robert".to_string(),
///     given_names: "Alban".to_string(),
///     course_code: "BH011".to_string(),
///     course_title: "Bachelor of Engineering (Honours)".to_string(),
///     major_deg: "Mechanical Engineering".to_string(),
///     capstone_completed: YesNo::Y,
///     capstone_mark: Some(Decimal::from(82)),
///     wam: Some(Decimal::new(73933, 3)),
///     honours_class: Some(HonoursClass::H2A),
///     missing_information: YesNo::N,
///     comments: String::new(),
/// };
/// assert_eq!(row.missing_information, YesNo::N);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Student identifier.
    pub person_id: u64,
    /// Family name from the last-encountered row.
    pub surname: String,
    /// Given names from the last-encountered row.
    pub given_names: String,
    /// Course code from the last-encountered row.
    pub course_code: String,
    /// Course title from the last-encountered row.
    pub course_title: String,
    /// Declared major from the last-encountered row.
    pub major_deg: String,
    /// Whether any capstone-unit attempt exists in the history.
    pub capstone_completed: YesNo,
    /// Raw mark of the last capstone attempt, if any.
    pub capstone_mark: Option<Decimal>,
    /// Weighted average mark over core units, rounded to 3 decimal places.
    pub wam: Option<Decimal>,
    /// Honours band; absent when the WAM could not be computed.
    pub honours_class: Option<HonoursClass>,
    /// Y when eligibility checks produced comments for this student.
    pub missing_information: YesNo,
    /// Formatted eligibility comments; empty for eligible students.
    pub comments: String,
}

/// The complete result of an evaluation run.
///
/// Wraps the per-student report rows with identification and provenance
/// fields so callers can correlate a report with logs.
///
/// # Example
///
/// ```
/// use honours_engine::models::EvaluationReport;
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = EvaluationReport {
///     report_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     student_count: 0,
///     rows: vec![],
/// };
/// assert_eq!(report.student_count, report.rows.len());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// Number of distinct students evaluated.
    pub student_count: usize,
    /// One row per student, ordered by ascending person id.
    pub rows: Vec<ReportRow>,
}
