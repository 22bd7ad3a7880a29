//! The rule repository query surface.
//!
//! The calculation layer consumes the handbook exclusively through the
//! [`RuleRepository`] trait, so rule data can come from any backing store
//! that can answer the three queries.

use crate::error::{EngineError, EngineResult};

use super::types::{Handbook, MajorId, MajorRule};

/// Read-only query surface over majors, rules, and units.
///
/// All methods are fallible so implementations backed by external stores
/// can surface access failures; the engine propagates such errors
/// unmodified. The in-memory [`Handbook`] implementation only fails on
/// queries for ids it never issued.
pub trait RuleRepository {
    /// Returns the ids of every version of the named major, ascending.
    /// An unknown name yields an empty vector, not an error.
    fn major_ids(&self, major_name: &str) -> EngineResult<Vec<MajorId>>;

    /// Returns the resolved rules of one major version.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Repository`] for an id the repository never
    /// issued.
    fn rules_for_major(&self, major_id: MajorId) -> EngineResult<Vec<MajorRule>>;

    /// Returns whether the unit appears in any rule of any version of the
    /// named major. Matches by name only, pooling every year.
    fn is_unit_in_major(&self, unit_code: &str, major_name: &str) -> EngineResult<bool>;
}

impl RuleRepository for Handbook {
    fn major_ids(&self, major_name: &str) -> EngineResult<Vec<MajorId>> {
        Ok(self.version_ids_for_name(major_name))
    }

    fn rules_for_major(&self, major_id: MajorId) -> EngineResult<Vec<MajorRule>> {
        let version = self
            .version_by_id(major_id)
            .ok_or_else(|| EngineError::Repository {
                message: format!("no major with id {}", major_id),
            })?;

        version
            .rule_ids
            .iter()
            .map(|&rule_id| {
                self.rule_by_id(rule_id)
                    .cloned()
                    .ok_or_else(|| EngineError::Repository {
                        message: format!("no rule with id {}", rule_id),
                    })
            })
            .collect()
    }

    fn is_unit_in_major(&self, unit_code: &str, major_name: &str) -> EngineResult<bool> {
        Ok(self.major_contains_unit(unit_code, major_name))
    }
}
