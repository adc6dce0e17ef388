//! **A deterministic career matching and recommendation engine.**
//!
//! `career-compass` turns a student's self-reported profile (interests,
//! academic performance, personality traits, values, constraints) and a
//! static career catalog into a ranked, tiered recommendation list with
//! human-readable justification for every score.
//!
//! The whole pipeline is closed-form arithmetic over enumerated inputs:
//! no free-text interpretation, no embeddings, no model calls. Identical
//! inputs always produce byte-identical reports, including the order of
//! every reasoning string.
//!
//! ## Pipeline
//!
//! Data flows strictly one way:
//!
//! ```text
//! Profile -> CategoryScorer -> CareerScorer -> ConstraintEvaluator -> Classifier -> MatchReport
//! ```
//!
//! - **[`scoring::CategoryScorer`]**: weighted accumulation over data-driven
//!   criteria tables plus a values-alignment similarity pass; one score in
//!   [0, 100] per category.
//! - **[`scoring::CareerScorer`]**: blends each career's primary (75%) and
//!   secondary (25%) category scores into a raw score.
//! - **[`scoring::ConstraintEvaluator`]**: additive penalties for
//!   preparation gaps, slow entry paths, physical-demand conflicts, and
//!   cost burdens; each fired rule leaves a feasibility note.
//! - **[`scoring::Classifier`]**: partitions careers into top / mid /
//!   stretch tiers using dual absolute and relative thresholds.
//!
//! Every stage is a pure function of immutable inputs, so one
//! [`MatchEngine`] can serve any number of threads concurrently; the
//! `batch` CLI command leans on exactly that.
//!
//! ## Getting Started
//!
//! ```
//! use career_compass::{MatchEngine, Profile};
//! use career_compass::model::{EducationCommitment, WorkStyle};
//!
//! let engine = MatchEngine::with_defaults();
//!
//! let mut profile = Profile::new(11, EducationCommitment::Certificate);
//! profile.work_styles.push(WorkStyle::HandsOn);
//!
//! let report = engine.recommend(&profile);
//! for career in &report.top {
//!     println!("{} ({}/100)", career.title, career.score);
//!     for reason in &career.reasoning {
//!         println!("  - {reason}");
//!     }
//! }
//! ```
//!
//! ## Custom catalogs
//!
//! The catalog, criteria tables, and every threshold/penalty magnitude are
//! configuration, not code. Load overrides from a YAML file and the engine
//! validates them before the first match:
//!
//! ```no_run
//! use career_compass::{config, MatchEngine};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = config::load_config_file(Path::new("school-catalog.yaml"))?;
//!     let (catalog, criteria, params) = file.into_parts();
//!     let engine = MatchEngine::new(catalog, criteria, params)?;
//!     println!("{} careers loaded", engine.catalog().career_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `career-compass` binary
//! wraps it with `match`, `batch`, `validate`, `catalog`, and `schema`
//! subcommands; see the project README.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: score math is bounded to [0, 100] before any cast
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{
    BlendWeights, CompassConfigFile, ConfigError, EngineParams, GroupWeights, PenaltyConfig,
    TierCaps, TierThresholds, Validatable,
};
pub use engine::MatchEngine;
pub use error::{CompassError, Result};
pub use model::{
    Career, CareerCatalog, Category, CategoryInsight, MatchReport, Profile, RankedCareer, Tier,
};
pub use reports::{render, ReportFormat};
pub use scoring::{CriteriaEntry, CriteriaTable};
