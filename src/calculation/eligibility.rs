//! Graduation eligibility evaluation.
//!
//! This module checks a student's enrollment history against every version
//! of their declared major and the course-wide graduation credit threshold.

use std::collections::{BTreeMap, HashSet};

use crate::error::EngineResult;
use crate::handbook::{EngineSettings, MajorId, RuleRepository};
use crate::models::EnrollmentRecord;

use super::grade_policy::is_passing_grade;

/// Whether a student may graduate under some version of their major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityStatus {
    /// Every rule of this major version is satisfied and the graduation
    /// threshold is met.
    Eligible(MajorId),
    /// No version was satisfied, or the graduation threshold was missed.
    NotEligible,
}

/// The outcome of evaluating one student against their declared major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityResult {
    /// The overall status.
    pub status: EligibilityStatus,
    /// Failure comments per major version, deduplicated in first-occurrence
    /// order. Keys iterate in ascending id order.
    pub comments: BTreeMap<MajorId, Vec<String>>,
    /// Diagnostics not tied to any version, such as an unknown major name.
    pub notes: Vec<String>,
}

impl EligibilityResult {
    /// Returns true when some major version was fully satisfied.
    pub fn is_eligible(&self) -> bool {
        matches!(self.status, EligibilityStatus::Eligible(_))
    }

    /// Formats the collected comments for the report: notes first, then one
    /// line per commented version with its comments joined by ", ".
    pub fn comment_lines(&self) -> Vec<String> {
        let mut lines = self.notes.clone();
        for version_comments in self.comments.values() {
            if !version_comments.is_empty() {
                lines.push(version_comments.join(", "));
            }
        }
        lines
    }
}

/// Evaluates a student's graduation eligibility for their declared major.
///
/// Every major version sharing the declared name is a candidate, checked
/// in ascending id order. A version is satisfied when each of its rules
/// passes two checks: every zero-credit unit not on the configured ignore
/// list has been completed, and the completed credit among the rule's
/// units reaches the rule's requirement. Completion follows
/// [`is_passing_grade`](super::is_passing_grade), so N and N+ attempts
/// never count here even though they carry a mark.
///
/// When a version is satisfied, the student's whole history must still
/// total the graduation credit threshold, counting each distinct passed
/// unit once; falling short overrides the result to not eligible with an
/// explanatory comment under the satisfying version.
///
/// An unknown major name yields a not-eligible result carrying a
/// diagnostic note rather than an error.
///
/// # Example
///
/// ```no_run
/// use honours_engine::calculation::evaluate_eligibility;
/// use honours_engine::handbook::HandbookLoader;
///
/// let loader = HandbookLoader::load("./config/bh011")?;
/// let result = evaluate_eligibility(
///     "Mechanical Engineering",
///     &[],
///     loader.handbook(),
///     loader.settings(),
/// )?;
/// assert!(!result.is_eligible());
/// # Ok::<(), honours_engine::error::EngineError>(())
/// ```
pub fn evaluate_eligibility(
    major_name: &str,
    enrollments: &[EnrollmentRecord],
    repository: &dyn RuleRepository,
    settings: &EngineSettings,
) -> EngineResult<EligibilityResult> {
    let passed_units: HashSet<&str> = enrollments
        .iter()
        .filter(|r| is_passing_grade(&r.grade))
        .map(|r| r.unit_code.as_str())
        .collect();

    let mut version_ids = repository.major_ids(major_name)?;
    version_ids.sort_unstable();

    if version_ids.is_empty() {
        return Ok(EligibilityResult {
            status: EligibilityStatus::NotEligible,
            comments: BTreeMap::new(),
            notes: vec![format!(
                "No major named '{}' exists in the rule repository",
                major_name
            )],
        });
    }

    let mut comments: BTreeMap<MajorId, Vec<String>> = BTreeMap::new();
    let mut satisfied: Option<MajorId> = None;

    for &major_id in &version_ids {
        let rules = repository.rules_for_major(major_id)?;
        let mut version_comments: Vec<String> = Vec::new();

        for rule in &rules {
            for unit in &rule.units {
                if unit.credit_points == 0
                    && !settings.ignores_zero_credit_unit(&unit.code)
                    && !passed_units.contains(unit.code.as_str())
                {
                    version_comments.push(format!(
                        "Student has not completed 0 credit point unit: {}",
                        unit.code
                    ));
                }
            }

            let completed_credit: u32 = rule
                .units
                .iter()
                .filter(|u| passed_units.contains(u.code.as_str()))
                .map(|u| u.credit_points)
                .sum();

            if completed_credit < rule.required_credit_points {
                version_comments.push(format!(
                    "Missing {} credit points for rule {}",
                    rule.required_credit_points - completed_credit,
                    rule.id
                ));
            }
        }

        dedupe_preserving_order(&mut version_comments);

        if version_comments.is_empty() {
            if satisfied.is_none() {
                satisfied = Some(major_id);
            }
        } else {
            comments.insert(major_id, version_comments);
        }
    }

    let status = match satisfied {
        Some(major_id) => {
            let total = total_passed_credit_points(enrollments);
            if total < settings.graduation_credit_points {
                comments.entry(major_id).or_default().push(format!(
                    "Insufficient credit points to graduate. Completed {} of {}",
                    total, settings.graduation_credit_points
                ));
                EligibilityStatus::NotEligible
            } else {
                EligibilityStatus::Eligible(major_id)
            }
        }
        None => EligibilityStatus::NotEligible,
    };

    Ok(EligibilityResult {
        status,
        comments,
        notes: Vec::new(),
    })
}

/// Total credit of every distinct passed unit, at the achievable credit
/// points of its first passing attempt.
fn total_passed_credit_points(enrollments: &[EnrollmentRecord]) -> u32 {
    let mut counted: HashSet<&str> = HashSet::new();
    let mut total = 0;

    for record in enrollments {
        if is_passing_grade(&record.grade) && counted.insert(record.unit_code.as_str()) {
            total += record.achievable_credit_points;
        }
    }

    total
}

fn dedupe_preserving_order(comments: &mut Vec<String>) {
    let mut seen: HashSet<String> = HashSet::new();
    comments.retain(|comment| seen.insert(comment.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::handbook::{
        CourseMetadata, EngineSettings, Handbook, MajorConfig, MajorRule, RuleConfig,
    };
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn test_settings() -> EngineSettings {
        EngineSettings {
            graduation_credit_points: 24,
            capstone_unit: "GENG4412".to_string(),
            zero_credit_ignore: vec!["GENG1000".to_string()],
        }
    }

    fn handbook_with(majors: Vec<MajorConfig>) -> Handbook {
        let course = CourseMetadata {
            code: "BH011".to_string(),
            title: "Bachelor of Engineering (Honours)".to_string(),
            version: "2023".to_string(),
            source_url: "https://handbooks.uwa.edu.au/coursedetails?code=BH011".to_string(),
        };
        let units = HashMap::from([
            ("MECH3024".to_string(), 6),
            ("MECH4426".to_string(), 6),
            ("MECH5552".to_string(), 6),
            ("MATH1011".to_string(), 6),
            ("CITS2401".to_string(), 6),
            ("GENG5010".to_string(), 0),
            ("GENG1000".to_string(), 0),
        ]);
        Handbook::new(course, test_settings(), units, majors).unwrap()
    }

    fn major(name: &str, year: i32, rules: Vec<RuleConfig>) -> MajorConfig {
        MajorConfig {
            name: name.to_string(),
            year,
            rules,
        }
    }

    fn rule(required: u32, units: &[&str]) -> RuleConfig {
        RuleConfig {
            required_credit_points: required,
            units: units.iter().map(|u| u.to_string()).collect(),
        }
    }

    /// Two versions of Mechanical Engineering differing in one rule unit:
    /// id 1 (2022) wants MECH3024 + MECH4426, id 2 (2023) wants
    /// MECH3024 + MECH5552.
    fn two_version_handbook() -> Handbook {
        handbook_with(vec![
            major(
                "Mechanical Engineering",
                2022,
                vec![rule(12, &["MECH3024", "MECH4426"])],
            ),
            major(
                "Mechanical Engineering",
                2023,
                vec![rule(12, &["MECH3024", "MECH5552"])],
            ),
        ])
    }

    fn record(unit: &str, grade: &str) -> EnrollmentRecord {
        EnrollmentRecord {
            person_id: 1,
            surname: "Student".to_string(),
            given_names: "Test".to_string(),
            course_code: "BH011".to_string(),
            course_title: "Bachelor of Engineering (Honours)".to_string(),
            major_deg: "Mechanical Engineering".to_string(),
            unit_code: unit.to_string(),
            grade: grade.to_string(),
            mark: Decimal::from(60),
            enrolled_credit_points: 6,
            achievable_credit_points: 6,
        }
    }

    #[test]
    fn test_satisfying_all_rules_and_threshold_is_eligible() {
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MATH1011", "HD"),
            record("CITS2401", "D"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::Eligible(1));
        assert!(result.notes.is_empty());
        // The unsatisfied 2023 version still records its shortfall.
        assert_eq!(
            result.comments.get(&2),
            Some(&vec!["Missing 6 credit points for rule 2".to_string()])
        );
    }

    #[test]
    fn test_first_satisfying_version_wins_by_ascending_id() {
        // MECH3024 + MECH4426 + MECH5552 satisfies both versions.
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MECH5552", "P"),
            record("MATH1011", "HD"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::Eligible(1));
        assert!(result.comments.is_empty());
    }

    #[test]
    fn test_later_version_can_be_the_satisfying_one() {
        // MECH5552 instead of MECH4426: only the 2023 version passes.
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH5552", "P"),
            record("MATH1011", "HD"),
            record("CITS2401", "D"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::Eligible(2));
        assert_eq!(
            result.comments.get(&1),
            Some(&vec!["Missing 6 credit points for rule 1".to_string()])
        );
    }

    #[test]
    fn test_shortfall_comment_names_rule_and_missing_credit() {
        let enrollments = vec![record("MECH3024", "CR")];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::NotEligible);
        assert_eq!(
            result.comments.get(&1),
            Some(&vec!["Missing 6 credit points for rule 1".to_string()])
        );
        assert_eq!(
            result.comments.get(&2),
            Some(&vec!["Missing 6 credit points for rule 2".to_string()])
        );
    }

    #[test]
    fn test_failed_attempts_do_not_complete_units() {
        // N and N+ carry marks but never count as completed.
        let enrollments = vec![
            record("MECH3024", "N"),
            record("MECH4426", "N+"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::NotEligible);
        assert_eq!(
            result.comments.get(&1),
            Some(&vec!["Missing 12 credit points for rule 1".to_string()])
        );
    }

    #[test]
    fn test_supplementary_pass_completes_units() {
        let enrollments = vec![
            record("MECH3024", "PS"),
            record("MECH4426", "PS"),
            record("MATH1011", "UP"),
            record("CITS2401", "PA"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::Eligible(1));
    }

    #[test]
    fn test_unpassed_zero_credit_unit_blocks_version() {
        let handbook = handbook_with(vec![major(
            "Mechanical Engineering",
            2023,
            vec![rule(12, &["MECH3024", "MECH4426", "GENG5010"])],
        )]);
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MATH1011", "HD"),
            record("CITS2401", "D"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &handbook,
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::NotEligible);
        assert_eq!(
            result.comments.get(&1),
            Some(&vec![
                "Student has not completed 0 credit point unit: GENG5010".to_string()
            ])
        );
    }

    #[test]
    fn test_passed_zero_credit_unit_satisfies_check() {
        let handbook = handbook_with(vec![major(
            "Mechanical Engineering",
            2023,
            vec![rule(12, &["MECH3024", "MECH4426", "GENG5010"])],
        )]);
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("GENG5010", "UP"),
            record("MATH1011", "HD"),
            record("CITS2401", "D"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &handbook,
            &test_settings(),
        )
        .unwrap();

        assert!(result.is_eligible());
    }

    #[test]
    fn test_ignore_listed_zero_credit_unit_is_not_checked() {
        // GENG1000 sits on the ignore list, so omitting it costs nothing.
        let handbook = handbook_with(vec![major(
            "Mechanical Engineering",
            2023,
            vec![rule(12, &["MECH3024", "MECH4426", "GENG1000"])],
        )]);
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MATH1011", "HD"),
            record("CITS2401", "D"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &handbook,
            &test_settings(),
        )
        .unwrap();

        assert!(result.is_eligible());
    }

    #[test]
    fn test_zero_credit_comment_deduplicated_across_rules() {
        let handbook = handbook_with(vec![major(
            "Mechanical Engineering",
            2023,
            vec![
                rule(6, &["MECH3024", "GENG5010"]),
                rule(6, &["MECH4426", "GENG5010"]),
            ],
        )]);
        let enrollments = vec![record("MECH3024", "CR"), record("MECH4426", "P")];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &handbook,
            &test_settings(),
        )
        .unwrap();

        let version_comments = result.comments.get(&1).unwrap();
        assert_eq!(
            version_comments,
            &vec!["Student has not completed 0 credit point unit: GENG5010".to_string()]
        );
    }

    #[test]
    fn test_threshold_shortfall_overrides_eligibility() {
        // Rules pass on 12 credits but graduation needs 24.
        let enrollments = vec![record("MECH3024", "CR"), record("MECH4426", "P")];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::NotEligible);
        let version_comments = result.comments.get(&1).unwrap();
        assert!(version_comments.contains(
            &"Insufficient credit points to graduate. Completed 12 of 24".to_string()
        ));
    }

    #[test]
    fn test_threshold_met_exactly_is_eligible() {
        let settings = EngineSettings {
            graduation_credit_points: 18,
            ..test_settings()
        };
        let enrollments = vec![
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MATH1011", "HD"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &settings,
        )
        .unwrap();

        assert!(result.is_eligible());
    }

    #[test]
    fn test_repeated_passes_count_once_toward_graduation_total() {
        let enrollments = vec![
            record("MECH3024", "P"),
            record("MECH3024", "CR"),
            record("MECH4426", "P"),
            record("MATH1011", "HD"),
        ];

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &enrollments,
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        // 18 distinct credits, not 24.
        assert_eq!(result.status, EligibilityStatus::NotEligible);
        let version_comments = result.comments.get(&1).unwrap();
        assert!(version_comments.contains(
            &"Insufficient credit points to graduate. Completed 18 of 24".to_string()
        ));
    }

    #[test]
    fn test_unknown_major_yields_note_not_error() {
        let result = evaluate_eligibility(
            "Software Engineering",
            &[record("MECH3024", "CR")],
            &two_version_handbook(),
            &test_settings(),
        )
        .unwrap();

        assert_eq!(result.status, EligibilityStatus::NotEligible);
        assert!(result.comments.is_empty());
        assert_eq!(result.notes.len(), 1);
        assert!(result.notes[0].contains("Software Engineering"));
    }

    #[test]
    fn test_repository_failure_propagates() {
        struct FailingRepository;

        impl RuleRepository for FailingRepository {
            fn major_ids(&self, _major_name: &str) -> EngineResult<Vec<MajorId>> {
                Ok(vec![1])
            }

            fn rules_for_major(&self, _major_id: MajorId) -> EngineResult<Vec<MajorRule>> {
                Err(EngineError::Repository {
                    message: "backend offline".to_string(),
                })
            }

            fn is_unit_in_major(
                &self,
                _unit_code: &str,
                _major_name: &str,
            ) -> EngineResult<bool> {
                Ok(false)
            }
        }

        let result = evaluate_eligibility(
            "Mechanical Engineering",
            &[],
            &FailingRepository,
            &test_settings(),
        );

        match result {
            Err(EngineError::Repository { message }) => assert_eq!(message, "backend offline"),
            other => panic!("Expected Repository error, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_lines_order_notes_then_versions() {
        let result = EligibilityResult {
            status: EligibilityStatus::NotEligible,
            comments: BTreeMap::from([
                (2, vec!["b1".to_string(), "b2".to_string()]),
                (1, vec!["a".to_string()]),
            ]),
            notes: vec!["note".to_string()],
        };

        assert_eq!(
            result.comment_lines(),
            vec!["note".to_string(), "a".to_string(), "b1, b2".to_string()]
        );
    }
}
