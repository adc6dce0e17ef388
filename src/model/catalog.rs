//! Static career catalog: categories, careers, and lookup indexes.
//!
//! The catalog is loaded once at startup and never changes afterwards.
//! Careers keep their file order; that order is the deterministic
//! tie-breaker everywhere downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalized affinity of a category across the four value dimensions.
///
/// All components are in [0, 1]. The same structure encodes a student's
/// declared values so the two can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ValueProfile {
    pub income: f64,
    pub stability: f64,
    pub helping: f64,
    pub risk: f64,
}

impl ValueProfile {
    /// Mean absolute agreement with another profile, restricted to the
    /// dimensions selected by `mask`. Returns `None` when no dimension is
    /// selected.
    #[must_use]
    pub fn similarity(&self, other: &Self, mask: &ValueMask) -> Option<f64> {
        let mut total = 0.0;
        let mut dims = 0u32;
        let pairs = [
            (mask.income, self.income, other.income),
            (mask.stability, self.stability, other.stability),
            (mask.helping, self.helping, other.helping),
            (mask.risk, self.risk, other.risk),
        ];
        for (selected, a, b) in pairs {
            if selected {
                total += 1.0 - (a - b).abs();
                dims += 1;
            }
        }
        (dims > 0).then(|| total / f64::from(dims))
    }

    /// True when every component lies in [0, 1].
    #[must_use]
    pub fn in_unit_range(&self) -> bool {
        [self.income, self.stability, self.helping, self.risk]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

/// Which value dimensions a student actually declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueMask {
    pub income: bool,
    pub stability: bool,
    pub helping: bool,
    pub risk: bool,
}

impl ValueMask {
    /// True when at least one dimension was declared.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.income || self.stability || self.helping || self.risk
    }
}

/// A coarse grouping of careers sharing thematic affinity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Category {
    /// Stable identifier referenced by careers and criteria entries
    pub id: String,
    /// Display name used in reasoning strings
    pub name: String,
    /// Value-dimension affinities in [0, 1]
    pub values: ValueProfile,
}

/// Formal preparation a career requires before entry.
///
/// Shares an ordinal ladder with
/// [`EducationCommitment`](crate::model::EducationCommitment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PreparationLevel {
    OnTheJob,
    Certificate,
    Associate,
    Bachelor,
    Graduate,
}

impl PreparationLevel {
    /// Position on the shared preparation ladder.
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::OnTheJob => 0,
            Self::Certificate => 1,
            Self::Associate => 2,
            Self::Bachelor => 3,
            Self::Graduate => 4,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnTheJob => "on-the-job training",
            Self::Certificate => "a certificate program",
            Self::Associate => "an associate degree",
            Self::Bachelor => "a bachelor's degree",
            Self::Graduate => "a graduate degree",
        }
    }
}

/// Physical intensity of a career's day-to-day work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PhysicalDemand {
    Low,
    Moderate,
    High,
}

impl PhysicalDemand {
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }
}

/// A concrete recommendable career.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Career {
    /// Stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Primary category id (75% of the blended score)
    pub category: String,
    /// Optional secondary category id (25% of the blended score)
    #[serde(default)]
    pub secondary_category: Option<String>,
    /// Formal preparation required before entry
    pub preparation: PreparationLevel,
    /// Typical years from starting preparation to first paycheck
    pub years_to_entry: f64,
    /// Physical intensity of the work
    pub physical_demand: PhysicalDemand,
    /// Relative cost of the preparation path, in [0, 1]
    pub cost_level: f64,
    /// Difficulty/ambition ordinal used by the stretch-tier rule
    #[serde(default)]
    pub challenge: u8,
}

/// The full static catalog: categories plus careers, with id indexes.
///
/// Construct with [`CareerCatalog::new`]; the indexes are built once and the
/// catalog is immutable afterwards.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    categories: Vec<Category>,
    careers: Vec<Career>,
    category_index: IndexMap<String, usize>,
    career_index: IndexMap<String, usize>,
}

impl CareerCatalog {
    /// Build a catalog preserving the given insertion order.
    ///
    /// Duplicate ids are kept (first occurrence wins in lookups); the
    /// validation pass reports them as configuration errors.
    #[must_use]
    pub fn new(categories: Vec<Category>, careers: Vec<Career>) -> Self {
        let mut category_index = IndexMap::with_capacity(categories.len());
        for (i, c) in categories.iter().enumerate() {
            category_index.entry(c.id.clone()).or_insert(i);
        }
        let mut career_index = IndexMap::with_capacity(careers.len());
        for (i, c) in careers.iter().enumerate() {
            career_index.entry(c.id.clone()).or_insert(i);
        }
        Self {
            categories,
            careers,
            category_index,
            career_index,
        }
    }

    /// Categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Careers in catalog order.
    #[must_use]
    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    /// Index of a category id, if present.
    #[must_use]
    pub fn category_position(&self, id: &str) -> Option<usize> {
        self.category_index.get(id).copied()
    }

    /// Category by id, if present.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_position(id).map(|i| &self.categories[i])
    }

    /// Career by id, if present.
    #[must_use]
    pub fn career(&self, id: &str) -> Option<&Career> {
        self.career_index.get(id).map(|&i| &self.careers[i])
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn career_count(&self) -> usize {
        self.careers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            values: ValueProfile {
                income: 0.5,
                stability: 0.5,
                helping: 0.5,
                risk: 0.5,
            },
        }
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = CareerCatalog::new(
            vec![category("b"), category("a")],
            vec![],
        );
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(catalog.category_position("b"), Some(0));
        assert_eq!(catalog.category_position("a"), Some(1));
    }

    #[test]
    fn test_similarity_full_mask() {
        let a = ValueProfile {
            income: 1.0,
            stability: 1.0,
            helping: 1.0,
            risk: 1.0,
        };
        let b = ValueProfile {
            income: 0.0,
            stability: 0.0,
            helping: 0.0,
            risk: 0.0,
        };
        let mask = ValueMask {
            income: true,
            stability: true,
            helping: true,
            risk: true,
        };
        assert_eq!(a.similarity(&b, &mask), Some(0.0));
        assert_eq!(a.similarity(&a, &mask), Some(1.0));
    }

    #[test]
    fn test_similarity_partial_mask_averages_declared_dims() {
        let student = ValueProfile {
            income: 1.0,
            stability: 0.0,
            helping: 0.0,
            risk: 0.0,
        };
        let cat = ValueProfile {
            income: 1.0,
            stability: 1.0,
            helping: 1.0,
            risk: 1.0,
        };
        let mask = ValueMask {
            income: true,
            ..ValueMask::default()
        };
        // Only the income dimension is declared; the mismatch elsewhere is ignored.
        assert_eq!(student.similarity(&cat, &mask), Some(1.0));
        assert_eq!(student.similarity(&cat, &ValueMask::default()), None);
    }

    #[test]
    fn test_preparation_ladder_matches_commitment_ladder() {
        use crate::model::EducationCommitment;
        assert_eq!(
            PreparationLevel::Certificate.level(),
            EducationCommitment::Certificate.level()
        );
        assert_eq!(
            PreparationLevel::Bachelor.level(),
            EducationCommitment::Bachelor.level()
        );
    }

    #[test]
    fn test_demand_ordinal() {
        assert!(PhysicalDemand::High.ordinal() >= 2);
        assert!(PhysicalDemand::Moderate.ordinal() < 2);
    }
}
