//! Report assembly.
//!
//! This module groups enrollment histories by student, runs the
//! eligibility and WAM evaluations, and merges the outcomes into one
//! report row per student.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::handbook::{EngineSettings, RuleRepository};
use crate::models::{EnrollmentRecord, ReportRow, YesNo};

use super::eligibility::evaluate_eligibility;
use super::honours::classify_honours;
use super::wam::calculate_wam;

/// Computes the full eligibility and WAM report for a batch of enrollment
/// records.
///
/// Records are grouped by person id and evaluated per student; the
/// returned rows are ordered by ascending person id. Identity fields come
/// from each student's last record in input order. The whole computation
/// reads only its inputs, so evaluating the same batch twice produces the
/// same rows.
///
/// # Example
///
/// ```no_run
/// use honours_engine::calculation::compute_report;
/// use honours_engine::handbook::HandbookLoader;
///
/// let loader = HandbookLoader::load("./config/bh011")?;
/// let rows = compute_report(&[], loader.handbook(), loader.settings())?;
/// assert!(rows.is_empty());
/// # Ok::<(), honours_engine::error::EngineError>(())
/// ```
pub fn compute_report(
    enrollments: &[EnrollmentRecord],
    repository: &dyn RuleRepository,
    settings: &EngineSettings,
) -> EngineResult<Vec<ReportRow>> {
    let mut by_student: BTreeMap<u64, Vec<EnrollmentRecord>> = BTreeMap::new();
    for record in enrollments {
        by_student
            .entry(record.person_id)
            .or_default()
            .push(record.clone());
    }

    let mut rows = Vec::with_capacity(by_student.len());
    for (person_id, records) in &by_student {
        rows.push(assemble_row(*person_id, records, repository, settings)?);
    }

    Ok(rows)
}

/// Builds the report row for one student.
fn assemble_row(
    person_id: u64,
    records: &[EnrollmentRecord],
    repository: &dyn RuleRepository,
    settings: &EngineSettings,
) -> EngineResult<ReportRow> {
    let identity = records
        .last()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("student {} has no enrollment records", person_id),
        })?;

    let eligibility = evaluate_eligibility(&identity.major_deg, records, repository, settings)?;
    let wam_result = calculate_wam(&identity.major_deg, records, repository, settings)?;

    let honours_class = wam_result
        .wam
        .map(|wam| classify_honours(wam, wam_result.capstone_mark));

    let (missing_information, comments) = if eligibility.is_eligible() {
        (YesNo::N, String::new())
    } else {
        (YesNo::Y, eligibility.comment_lines().join("\n"))
    };

    Ok(ReportRow {
        person_id,
        surname: identity.surname.clone(),
        given_names: identity.given_names.clone(),
        course_code: identity.course_code.clone(),
        course_title: identity.course_title.clone(),
        major_deg: identity.major_deg.clone(),
        capstone_completed: YesNo::from(wam_result.capstone_mark.is_some()),
        capstone_mark: wam_result.capstone_mark,
        wam: wam_result.wam,
        honours_class,
        missing_information,
        comments,
    })
}
