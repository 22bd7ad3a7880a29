//! Request types for the honours evaluation API.
//!
//! This module defines the JSON request structures for the `/report` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EnrollmentRecord;

/// Request body for the `/report` endpoint.
///
/// Contains the enrollment history rows to evaluate. Rows for several
/// students may be mixed together in any order; the engine groups them
/// by person id before evaluating each student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The enrollment rows to evaluate.
    pub enrollments: Vec<EnrollmentRequest>,
}

/// A single enrollment row in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// The student's person id.
    pub person_id: u64,
    /// The student's surname.
    pub surname: String,
    /// The student's given names.
    pub given_names: String,
    /// The course code (e.g., "BH011").
    pub course_code: String,
    /// The course title.
    pub course_title: String,
    /// The declared major within the course.
    pub major_deg: String,
    /// The unit code for this enrollment (e.g., "GENG4412").
    pub unit_code: String,
    /// The grade awarded for the attempt.
    pub grade: String,
    /// The raw mark awarded for the attempt.
    pub mark: Decimal,
    /// Credit points the student was enrolled in for the attempt.
    pub enrolled_credit_points: u32,
    /// Credit points awarded on successful completion.
    pub achievable_credit_points: u32,
}

impl From<EnrollmentRequest> for EnrollmentRecord {
    fn from(req: EnrollmentRequest) -> Self {
        EnrollmentRecord {
            person_id: req.person_id,
            surname: req.surname,
            given_names: req.given_names,
            course_code: req.course_code,
            course_title: req.course_title,
            major_deg: req.major_deg,
            unit_code: req.unit_code,
            grade: req.grade,
            mark: req.mark,
            enrolled_credit_points: req.enrolled_credit_points,
            achievable_credit_points: req.achievable_credit_points,
        }
    }
}
