//! Handbook loading functionality.
//!
//! This module provides the [`HandbookLoader`] type for loading degree
//! handbook configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CourseMetadata, EngineSettings, Handbook, MajorConfig, UnitsConfig};

/// Loads and provides access to a degree handbook.
///
/// The `HandbookLoader` reads YAML configuration files from a directory
/// and assembles them into a validated [`Handbook`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/bh011/
/// ├── course.yaml    # Course metadata
/// ├── settings.yaml  # Graduation threshold, capstone unit, ignore list
/// ├── units.yaml     # Unit catalogue: code -> credit points
/// └── majors/
///     └── mechanical-engineering-2023.yaml  # One major version per file
/// ```
///
/// # Example
///
/// ```no_run
/// use honours_engine::handbook::{HandbookLoader, RuleRepository};
///
/// let loader = HandbookLoader::load("./config/bh011").unwrap();
///
/// // Look up every version of a major
/// let ids = loader.handbook().major_ids("Mechanical Engineering").unwrap();
/// println!("Versions: {:?}", ids);
///
/// // Inspect a version's rules
/// let rules = loader.handbook().rules_for_major(ids[0]).unwrap();
/// println!("First rule needs {} credit points", rules[0].required_credit_points);
/// ```
#[derive(Debug, Clone)]
pub struct HandbookLoader {
    handbook: Handbook,
}

impl HandbookLoader {
    /// Loads a handbook from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/bh011")
    ///
    /// # Returns
    ///
    /// Returns a `HandbookLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A rule references a unit missing from the catalogue
    /// - Two files define the same major (name, year)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use honours_engine::handbook::HandbookLoader;
    ///
    /// let loader = HandbookLoader::load("./config/bh011")?;
    /// # Ok::<(), honours_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load course.yaml
        let course_path = path.join("course.yaml");
        let course = Self::load_yaml::<CourseMetadata>(&course_path)?;

        // Load settings.yaml
        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&settings_path)?;

        // Load units.yaml
        let units_path = path.join("units.yaml");
        let units_config = Self::load_yaml::<UnitsConfig>(&units_path)?;

        // Load all major version files from the majors directory
        let majors_dir = path.join("majors");
        let majors = Self::load_majors(&majors_dir)?;

        let handbook = Handbook::new(course, settings, units_config.units, majors)?;

        Ok(Self { handbook })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all major version files from the majors directory.
    fn load_majors(majors_dir: &Path) -> EngineResult<Vec<MajorConfig>> {
        let majors_dir_str = majors_dir.display().to_string();

        if !majors_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: majors_dir_str,
            });
        }

        let entries = fs::read_dir(majors_dir).map_err(|_| EngineError::ConfigNotFound {
            path: majors_dir_str.clone(),
        })?;

        let mut majors = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: majors_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let major = Self::load_yaml::<MajorConfig>(&path)?;
                majors.push(major);
            }
        }

        if majors.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no major files found)", majors_dir_str),
            });
        }

        Ok(majors)
    }

    /// Returns the loaded handbook.
    pub fn handbook(&self) -> &Handbook {
        &self.handbook
    }

    /// Returns the course metadata.
    pub fn course(&self) -> &CourseMetadata {
        self.handbook.course()
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.handbook.settings()
    }
}
