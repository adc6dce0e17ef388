//! The matching engine: validated construction plus one pure `recommend`
//! call per profile.

use tracing::debug;

use crate::config::{self, EngineParams};
use crate::error::{CompassError, Result};
use crate::model::{CategoryInsight, CareerCatalog, MatchReport, Profile, RankedCareer};
use crate::scoring::{
    CareerScorer, CategoryScore, CategoryScorer, Classifier, ConstraintEvaluator, CriteriaTable,
    ScoredCareer,
};

/// Deterministic career-matching engine.
///
/// Holds the immutable catalog, criteria tables, and parameters; a single
/// engine value can serve any number of concurrent `recommend` calls (it is
/// `Send + Sync` and keeps no per-call state).
#[derive(Debug, Clone)]
pub struct MatchEngine {
    catalog: CareerCatalog,
    criteria: CriteriaTable,
    params: EngineParams,
}

impl MatchEngine {
    /// Build an engine, rejecting invalid configuration up front.
    ///
    /// A malformed catalog (dangling category reference, out-of-range
    /// affinity, bad thresholds) is a configuration bug; it surfaces here
    /// rather than during matching.
    pub fn new(
        catalog: CareerCatalog,
        criteria: CriteriaTable,
        params: EngineParams,
    ) -> Result<Self> {
        let errors = config::validate_setup(&catalog, &criteria, &params);
        if !errors.is_empty() {
            let summary = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CompassError::validation(summary));
        }
        Ok(Self {
            catalog,
            criteria,
            params,
        })
    }

    /// Engine over the built-in catalog, criteria tables, and reference
    /// parameters. The defaults are validated by the test suite, so this
    /// constructor cannot fail.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            catalog: CareerCatalog::new(
                config::defaults::default_categories(),
                config::defaults::default_careers(),
            ),
            criteria: CriteriaTable::from_entries(config::defaults::default_criteria_entries()),
            params: EngineParams::reference(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Produce a ranked, tiered recommendation report for one profile.
    ///
    /// Pure and infallible: unknown attribute values contribute nothing,
    /// absent optional fields are neutral, and an empty catalog yields
    /// empty tiers.
    pub fn recommend(&self, profile: &Profile) -> MatchReport {
        let category_scores =
            CategoryScorer::new(&self.catalog, &self.criteria, &self.params).score(profile);
        let mut scored =
            CareerScorer::new(&self.catalog, &self.params).score(&category_scores);
        ConstraintEvaluator::new(&self.catalog, &self.params).apply(profile, &mut scored);
        debug!(
            categories = category_scores.len(),
            careers = scored.len(),
            "scored catalog against profile"
        );
        let tiers = Classifier::new(&self.catalog, &self.params).classify(scored);

        MatchReport {
            top: self.ranked(tiers.top),
            mid: self.ranked(tiers.mid),
            stretch: self.ranked(tiers.stretch),
            categories: self.insights(&category_scores),
            disclaimer: config::defaults::DISCLAIMER.to_string(),
        }
    }

    fn ranked(&self, entries: Vec<ScoredCareer>) -> Vec<RankedCareer> {
        entries
            .into_iter()
            .map(|entry| {
                let career = &self.catalog.careers()[entry.career_index];
                RankedCareer {
                    id: career.id.clone(),
                    title: career.title.clone(),
                    score: round_score(entry.adjusted_score),
                    reasoning: entry.reasoning,
                    feasibility_notes: entry.feasibility_notes,
                }
            })
            .collect()
    }

    fn insights(&self, scores: &[CategoryScore]) -> Vec<CategoryInsight> {
        scores
            .iter()
            .take(self.params.category_limit)
            .map(|score| {
                let category = &self.catalog.categories()[score.category_index];
                CategoryInsight {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    score: round_score(score.score),
                    reasoning: score.reasoning.clone(),
                }
            })
            .collect()
    }
}

/// Round an engine score into the integer 0-100 the output contract uses.
fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EducationCommitment;

    #[test]
    fn test_default_engine_constructs() {
        let engine = MatchEngine::with_defaults();
        assert!(engine.catalog().career_count() > 0);
        assert!(engine.catalog().category_count() > 0);
    }

    #[test]
    fn test_defaults_pass_validation() {
        let engine = MatchEngine::with_defaults();
        let rebuilt = MatchEngine::new(
            engine.catalog.clone(),
            engine.criteria.clone(),
            engine.params,
        );
        assert!(rebuilt.is_ok(), "built-in defaults must validate cleanly");
    }

    #[test]
    fn test_empty_profile_produces_valid_report() {
        let engine = MatchEngine::with_defaults();
        let report = engine.recommend(&Profile::new(11, EducationCommitment::HighSchool));
        for insight in &report.categories {
            assert_eq!(insight.score, 0);
        }
        assert!(report.top.is_empty());
        assert!(report.mid.is_empty());
        assert!(!report.disclaimer.is_empty());
    }

    #[test]
    fn test_report_category_list_respects_limit() {
        let engine = MatchEngine::with_defaults();
        let report = engine.recommend(&Profile::new(11, EducationCommitment::Bachelor));
        assert!(report.categories.len() <= engine.params().category_limit);
    }

    #[test]
    fn test_round_score_clamps() {
        assert_eq!(round_score(-3.0), 0);
        assert_eq!(round_score(49.6), 50);
        assert_eq!(round_score(144.0), 100);
    }
}
