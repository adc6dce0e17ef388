//! Career scoring: blend category scores into per-career raw scores.
//!
//! A pure lookup-and-blend pass; all career-specific logic lives in the two
//! category references each catalog entry carries.

use crate::config::EngineParams;
use crate::model::CareerCatalog;

use super::category::CategoryScore;

/// A career part-way through the pipeline.
///
/// Created by the career scorer, adjusted by the constraint evaluator,
/// consumed by the classifier; never persisted.
#[derive(Debug, Clone)]
pub struct ScoredCareer {
    /// Position of the career in the catalog
    pub career_index: usize,
    /// Pre-constraint blended score
    pub raw_score: f64,
    /// Post-constraint score, floored at 0
    pub adjusted_score: f64,
    /// Justification strings in computation order
    pub reasoning: Vec<String>,
    /// Constraint mismatches recorded by the evaluator
    pub feasibility_notes: Vec<String>,
}

/// Blends category scores into raw career scores.
#[derive(Debug, Clone, Copy)]
pub struct CareerScorer<'a> {
    catalog: &'a CareerCatalog,
    params: &'a EngineParams,
}

impl<'a> CareerScorer<'a> {
    #[must_use]
    pub fn new(catalog: &'a CareerCatalog, params: &'a EngineParams) -> Self {
        Self { catalog, params }
    }

    /// Score every catalog career, in catalog order.
    ///
    /// `raw = primary_share * primary + secondary_share * secondary`; the
    /// secondary term is zero when the career has no secondary category.
    /// Careers referencing a category absent from `category_scores` score
    /// that term as zero (startup validation reports such catalogs).
    #[must_use]
    pub fn score(&self, category_scores: &[CategoryScore]) -> Vec<ScoredCareer> {
        let blend = &self.params.blend;
        let by_index: Vec<Option<&CategoryScore>> = {
            let mut slots = vec![None; self.catalog.category_count()];
            for score in category_scores {
                slots[score.category_index] = Some(score);
            }
            slots
        };
        let lookup = |id: &str| -> f64 {
            self.catalog
                .category_position(id)
                .and_then(|i| by_index[i])
                .map_or(0.0, |s| s.score)
        };

        self.catalog
            .careers()
            .iter()
            .enumerate()
            .map(|(career_index, career)| {
                let primary = lookup(&career.category);
                let mut raw_score = blend.primary * primary;
                let mut reasoning = Vec::new();

                if let Some(category) = self.catalog.category(&career.category) {
                    reasoning.push(format!(
                        "Builds on your {} fit ({:.0}% of this score)",
                        category.name,
                        blend.primary * 100.0
                    ));
                }

                if let Some(secondary_id) = &career.secondary_category {
                    let secondary = lookup(secondary_id);
                    raw_score += blend.secondary * secondary;
                    if let Some(category) = self.catalog.category(secondary_id) {
                        reasoning.push(format!(
                            "Also draws on {} ({:.0}% of this score)",
                            category.name,
                            blend.secondary * 100.0
                        ));
                    }
                }

                ScoredCareer {
                    career_index,
                    raw_score,
                    adjusted_score: raw_score,
                    reasoning,
                    feasibility_notes: Vec::new(),
                }
            })
            .collect()
    }
}
