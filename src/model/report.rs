//! The ranked result record returned to the presentation layer.
//!
//! Downstream collaborators (plan narration, UI) treat this record as
//! opaque, authoritative input; everything they display comes from here.

use serde::{Deserialize, Serialize};

/// One recommended career inside a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct RankedCareer {
    /// Catalog identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Constraint-adjusted score, rounded to an integer in 0-100
    pub score: u8,
    /// Justification strings in the order they were computed
    pub reasoning: Vec<String>,
    /// Constraint mismatches that penalized this career (empty for top tier)
    pub feasibility_notes: Vec<String>,
}

/// One scored category with its justification trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CategoryInsight {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category score, rounded to an integer in 0-100
    pub score: u8,
    /// Justification strings in the order they were computed
    pub reasoning: Vec<String>,
}

/// Tier a retained career was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Strong, feasible recommendations
    Top,
    /// Solid alternatives worth exploring
    Mid,
    /// Ambitious or partially-blocked options
    Stretch,
}

impl Tier {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Top => "best matches",
            Self::Mid => "worth exploring",
            Self::Stretch => "stretch options",
        }
    }
}

/// Complete ranked, tiered recommendation result for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[must_use]
pub struct MatchReport {
    /// Strong, feasible recommendations (never carry feasibility notes)
    pub top: Vec<RankedCareer>,
    /// Solid alternatives
    pub mid: Vec<RankedCareer>,
    /// Ambitious or partially-blocked options
    pub stretch: Vec<RankedCareer>,
    /// Highest-scoring categories with their reasoning
    pub categories: Vec<CategoryInsight>,
    /// Static disclaimer shown alongside every result
    pub disclaimer: String,
}

impl MatchReport {
    /// Total number of careers across all tiers.
    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        self.top.len() + self.mid.len() + self.stretch.len()
    }

    /// Iterate all tiers in rank order with their tier label.
    pub fn tiers(&self) -> impl Iterator<Item = (Tier, &[RankedCareer])> {
        [
            (Tier::Top, self.top.as_slice()),
            (Tier::Mid, self.mid.as_slice()),
            (Tier::Stretch, self.stretch.as_slice()),
        ]
        .into_iter()
    }

    /// True when no tier holds any recommendation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendation_count() == 0
    }
}
