//! Handbook loading and rule repository for the Honours Evaluation Engine.
//!
//! This module provides functionality to load degree handbook configurations
//! from YAML files, including course metadata, engine settings, the unit
//! catalogue, and major version rules, and exposes the loaded handbook
//! through the [`RuleRepository`] query trait.
//!
//! # Example
//!
//! ```no_run
//! use honours_engine::handbook::HandbookLoader;
//!
//! let loader = HandbookLoader::load("./config/bh011").unwrap();
//! println!("Loaded handbook for: {}", loader.course().title);
//! ```

mod loader;
mod repository;
mod types;

pub use loader::HandbookLoader;
pub use repository::RuleRepository;
pub use types::{
    CourseMetadata, EngineSettings, Handbook, MajorConfig, MajorId, MajorRule, MajorVersion,
    RuleConfig, RuleId, RuleUnit, UnitsConfig,
};
