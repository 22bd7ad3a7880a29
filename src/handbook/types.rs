//! Handbook types for degree rule evaluation.
//!
//! This module contains the strongly-typed structures deserialized from the
//! handbook YAML files, plus the [`Handbook`] arena they are assembled into.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};

/// Identifier of a major version. Assigned by the loader, contiguous from 1.
pub type MajorId = u32;

/// Identifier of a graduation rule. Assigned by the loader, contiguous from 1
/// across all majors.
pub type RuleId = u32;

/// Metadata about the course the handbook belongs to.
///
/// Contains identifying information about the course, including its code,
/// title, handbook version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseMetadata {
    /// The course code (e.g., "BH011").
    pub code: String,
    /// The human-readable title of the course.
    pub title: String,
    /// The handbook version or edition year.
    pub version: String,
    /// URL to the official handbook entry.
    pub source_url: String,
}

/// Engine settings from settings.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Total passed credit points required to graduate.
    pub graduation_credit_points: u32,
    /// The designated capstone unit code gating the top honours bands.
    pub capstone_unit: String,
    /// Zero-credit units exempt from the completion check.
    #[serde(default)]
    pub zero_credit_ignore: Vec<String>,
}

impl EngineSettings {
    /// Returns true when the given zero-credit unit is exempt from the
    /// completion check.
    pub fn ignores_zero_credit_unit(&self, unit_code: &str) -> bool {
        self.zero_credit_ignore.iter().any(|u| u == unit_code)
    }
}

/// Unit catalogue file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitsConfig {
    /// Map of unit code to credit points.
    pub units: HashMap<String, u32>,
}

/// A graduation rule as written in a major file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Credit points that must be passed among the listed units.
    pub required_credit_points: u32,
    /// Unit codes the rule draws on; must exist in the unit catalogue.
    pub units: Vec<String>,
}

/// A major version file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct MajorConfig {
    /// The major name; versions of the same major share this name.
    pub name: String,
    /// The handbook year this version applies to.
    pub year: i32,
    /// The graduation rules for this version.
    pub rules: Vec<RuleConfig>,
}

/// A unit reference within a resolved rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleUnit {
    /// The unit code.
    pub code: String,
    /// Credit points from the unit catalogue.
    pub credit_points: u32,
}

/// A graduation rule with its units resolved against the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorRule {
    /// The rule identifier.
    pub id: RuleId,
    /// Credit points that must be passed among the rule's units.
    pub required_credit_points: u32,
    /// The units the rule draws on.
    pub units: Vec<RuleUnit>,
}

/// One version of a major, identified by (name, year).
#[derive(Debug, Clone)]
pub struct MajorVersion {
    /// The assigned identifier.
    pub id: MajorId,
    /// The major name.
    pub name: String,
    /// The handbook year.
    pub year: i32,
    /// Identifiers of this version's rules.
    pub rule_ids: Vec<RuleId>,
}

/// The complete handbook assembled from YAML files.
///
/// Majors, rules, and units live in flat id-keyed tables with lookup
/// indexes by major name; nothing holds live back-references. Ids are
/// assigned at construction by sorting major versions on (name, year),
/// so a given configuration directory always produces the same ids.
#[derive(Debug, Clone)]
pub struct Handbook {
    /// Course metadata.
    course: CourseMetadata,
    /// Engine settings.
    settings: EngineSettings,
    /// Unit catalogue: code to credit points.
    units: HashMap<String, u32>,
    /// Major versions, ordered by id (index id - 1).
    majors: Vec<MajorVersion>,
    /// Resolved rules across all majors, ordered by id (index id - 1).
    rules: Vec<MajorRule>,
    /// Major name to ids of all its versions, ascending.
    majors_by_name: HashMap<String, Vec<MajorId>>,
    /// Major name to the unit codes of all its versions' rules.
    units_by_major_name: HashMap<String, HashSet<String>>,
}

impl Handbook {
    /// Assembles a handbook from its component parts, validating the
    /// major files against the unit catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHandbook`] when two files define the
    /// same (name, year) or a rule references a unit missing from the
    /// catalogue.
    pub fn new(
        course: CourseMetadata,
        settings: EngineSettings,
        units: HashMap<String, u32>,
        major_files: Vec<MajorConfig>,
    ) -> EngineResult<Self> {
        let mut sorted_files = major_files;
        sorted_files.sort_by(|a, b| (a.name.as_str(), a.year).cmp(&(b.name.as_str(), b.year)));

        let mut majors: Vec<MajorVersion> = Vec::with_capacity(sorted_files.len());
        let mut rules: Vec<MajorRule> = Vec::new();
        let mut majors_by_name: HashMap<String, Vec<MajorId>> = HashMap::new();
        let mut units_by_major_name: HashMap<String, HashSet<String>> = HashMap::new();

        for file in sorted_files {
            if majors
                .iter()
                .any(|m| m.name == file.name && m.year == file.year)
            {
                return Err(EngineError::InvalidHandbook {
                    message: format!("duplicate major version '{}' ({})", file.name, file.year),
                });
            }

            let major_id = (majors.len() + 1) as MajorId;
            let mut rule_ids = Vec::with_capacity(file.rules.len());

            for rule in &file.rules {
                let rule_id = (rules.len() + 1) as RuleId;
                let mut resolved = Vec::with_capacity(rule.units.len());

                for code in &rule.units {
                    let credit_points =
                        units
                            .get(code)
                            .copied()
                            .ok_or_else(|| EngineError::InvalidHandbook {
                                message: format!(
                                    "rule {} in major '{}' ({}) references unknown unit '{}'",
                                    rule_id, file.name, file.year, code
                                ),
                            })?;
                    resolved.push(RuleUnit {
                        code: code.clone(),
                        credit_points,
                    });
                }

                units_by_major_name
                    .entry(file.name.clone())
                    .or_default()
                    .extend(rule.units.iter().cloned());

                rules.push(MajorRule {
                    id: rule_id,
                    required_credit_points: rule.required_credit_points,
                    units: resolved,
                });
                rule_ids.push(rule_id);
            }

            majors_by_name
                .entry(file.name.clone())
                .or_default()
                .push(major_id);

            majors.push(MajorVersion {
                id: major_id,
                name: file.name,
                year: file.year,
                rule_ids,
            });
        }

        Ok(Self {
            course,
            settings,
            units,
            majors,
            rules,
            majors_by_name,
            units_by_major_name,
        })
    }

    /// Returns the course metadata.
    pub fn course(&self) -> &CourseMetadata {
        &self.course
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns all major versions, ordered by id.
    pub fn majors(&self) -> &[MajorVersion] {
        &self.majors
    }

    /// Returns all resolved rules, ordered by id.
    pub fn rules(&self) -> &[MajorRule] {
        &self.rules
    }

    /// Returns the credit points of a catalogued unit.
    pub fn unit_credit_points(&self, unit_code: &str) -> Option<u32> {
        self.units.get(unit_code).copied()
    }

    pub(super) fn version_ids_for_name(&self, major_name: &str) -> Vec<MajorId> {
        self.majors_by_name
            .get(major_name)
            .cloned()
            .unwrap_or_default()
    }

    pub(super) fn version_by_id(&self, major_id: MajorId) -> Option<&MajorVersion> {
        // Ids are contiguous from 1, so id - 1 indexes the table.
        major_id
            .checked_sub(1)
            .and_then(|idx| self.majors.get(idx as usize))
    }

    pub(super) fn rule_by_id(&self, rule_id: RuleId) -> Option<&MajorRule> {
        rule_id
            .checked_sub(1)
            .and_then(|idx| self.rules.get(idx as usize))
    }

    pub(super) fn major_contains_unit(&self, unit_code: &str, major_name: &str) -> bool {
        self.units_by_major_name
            .get(major_name)
            .is_some_and(|set| set.contains(unit_code))
    }
}
