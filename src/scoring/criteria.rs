//! Data-driven criteria mapping tables.
//!
//! Each entry maps one attribute value of one criterion to a partial weight
//! for one category. The scoring loop is a single generic look-up-and-
//! accumulate pass over these tuples; adding a criterion value is a data
//! change, not a code change.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which profile attribute an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum CriterionKind {
    WorkEnvironment,
    WorkStyle,
    ThinkingStyle,
    Subject,
    PersonalityTrait,
    Experience,
}

impl CriterionKind {
    /// The weighted group this criterion contributes to.
    #[must_use]
    pub const fn group(&self) -> CriterionGroup {
        match self {
            Self::WorkEnvironment | Self::WorkStyle | Self::ThinkingStyle => {
                CriterionGroup::Interests
            }
            Self::Subject => CriterionGroup::Academics,
            Self::PersonalityTrait => CriterionGroup::Personality,
            Self::Experience => CriterionGroup::Experience,
        }
    }
}

/// Criteria group sharing one weight and one point ceiling.
///
/// Values-alignment is computed by similarity rather than table lookup, so
/// it does not appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionGroup {
    Interests,
    Academics,
    Personality,
    Experience,
}

impl CriterionGroup {
    pub const ALL: &'static [Self] = &[
        Self::Interests,
        Self::Academics,
        Self::Personality,
        Self::Experience,
    ];
}

/// One (criterion, value, category, weight) mapping tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CriteriaEntry {
    /// Criterion the value belongs to
    pub criterion: CriterionKind,
    /// Attribute value token, e.g. `hands-on` or `biology`
    pub value: String,
    /// Category id this value contributes to
    pub category: String,
    /// Partial weight in (0, 1]
    pub weight: f64,
}

/// Per-category contribution of one matched attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeight {
    pub category: String,
    pub weight: f64,
}

/// Indexed criteria table: `(criterion, value) -> [(category, weight)]`.
///
/// Built once from the entry list; lookup order and the per-key category
/// order both follow the original entry order, which keeps reasoning output
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct CriteriaTable {
    entries: Vec<CriteriaEntry>,
    index: IndexMap<(CriterionKind, String), Vec<CategoryWeight>>,
}

impl CriteriaTable {
    /// Build a table from mapping tuples, preserving their order.
    #[must_use]
    pub fn from_entries(entries: Vec<CriteriaEntry>) -> Self {
        let mut index: IndexMap<(CriterionKind, String), Vec<CategoryWeight>> = IndexMap::new();
        for entry in &entries {
            index
                .entry((entry.criterion, entry.value.clone()))
                .or_default()
                .push(CategoryWeight {
                    category: entry.category.clone(),
                    weight: entry.weight,
                });
        }
        Self { entries, index }
    }

    /// Per-category contributions for one attribute value.
    ///
    /// Unknown values return an empty slice; the caller skips them silently.
    #[must_use]
    pub fn lookup(&self, criterion: CriterionKind, value: &str) -> &[CategoryWeight] {
        self.index
            .get(&(criterion, value.to_string()))
            .map_or(&[], Vec::as_slice)
    }

    /// The raw mapping tuples this table was built from.
    #[must_use]
    pub fn entries(&self) -> &[CriteriaEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(criterion: CriterionKind, value: &str, category: &str, weight: f64) -> CriteriaEntry {
        CriteriaEntry {
            criterion,
            value: value.to_string(),
            category: category.to_string(),
            weight,
        }
    }

    #[test]
    fn test_lookup_groups_by_key() {
        let table = CriteriaTable::from_entries(vec![
            entry(CriterionKind::WorkStyle, "hands-on", "skilled-trades", 0.9),
            entry(CriterionKind::WorkStyle, "hands-on", "healthcare", 0.4),
            entry(CriterionKind::Subject, "biology", "healthcare", 0.8),
        ]);

        let hits = table.lookup(CriterionKind::WorkStyle, "hands-on");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].category, "skilled-trades");
        assert_eq!(hits[1].category, "healthcare");

        assert!(table.lookup(CriterionKind::WorkStyle, "biology").is_empty());
        assert!(table.lookup(CriterionKind::Subject, "unknown-value").is_empty());
    }

    #[test]
    fn test_lookup_preserves_entry_order() {
        let table = CriteriaTable::from_entries(vec![
            entry(CriterionKind::PersonalityTrait, "curious", "science", 0.7),
            entry(CriterionKind::PersonalityTrait, "curious", "technology", 0.5),
        ]);
        let hits = table.lookup(CriterionKind::PersonalityTrait, "curious");
        assert_eq!(hits[0].category, "science");
        assert_eq!(hits[1].category, "technology");
    }

    #[test]
    fn test_criterion_group_assignment() {
        assert_eq!(
            CriterionKind::WorkEnvironment.group(),
            CriterionGroup::Interests
        );
        assert_eq!(CriterionKind::Subject.group(), CriterionGroup::Academics);
        assert_eq!(
            CriterionKind::PersonalityTrait.group(),
            CriterionGroup::Personality
        );
        assert_eq!(CriterionKind::Experience.group(), CriterionGroup::Experience);
    }
}
