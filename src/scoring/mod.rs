//! The deterministic scoring pipeline.
//!
//! Four stages, strictly one-way:
//!
//! 1. [`CategoryScorer`]: profile + criteria tables → category scores.
//! 2. [`CareerScorer`]: category scores + catalog → raw career scores.
//! 3. [`ConstraintEvaluator`]: penalties + feasibility notes.
//! 4. [`Classifier`]: tier partition with dual absolute/relative cutoffs.
//!
//! Every stage is a pure function of its inputs; reasoning strings are
//! appended in computation order and never re-sorted on their own.

mod career;
mod category;
mod classify;
mod constraints;
mod criteria;

pub use career::{CareerScorer, ScoredCareer};
pub use category::{CategoryScore, CategoryScorer};
pub use classify::{Classifier, TierAssignment};
pub use constraints::ConstraintEvaluator;
pub use criteria::{CategoryWeight, CriteriaEntry, CriteriaTable, CriterionGroup, CriterionKind};
