//! Category scoring: one weighted accumulation pass per profile.
//!
//! Every criteria group funnels through the same look-up-and-accumulate
//! loop; only values-alignment is computed differently (similarity against
//! the category's value profile instead of a table lookup).

use crate::config::EngineParams;
use crate::model::{
    Category, CareerCatalog, PerformanceRating, Profile, ValueMask, ValueProfile,
};

use super::criteria::{CriteriaTable, CriterionGroup, CriterionKind};

/// One scored category with its justification trail, in computation order.
#[derive(Debug, Clone)]
pub struct CategoryScore {
    /// Position of the category in the catalog
    pub category_index: usize,
    /// Final score in [0, 100]
    pub score: f64,
    /// Reasoning strings in the order the contributions were computed
    pub reasoning: Vec<String>,
}

/// Scores every catalog category against one profile.
#[derive(Debug, Clone, Copy)]
pub struct CategoryScorer<'a> {
    catalog: &'a CareerCatalog,
    criteria: &'a CriteriaTable,
    params: &'a EngineParams,
}

/// One attribute value ready for table lookup.
///
/// `strength` scales the contribution (performance factor for subjects,
/// 1.0 elsewhere); `phrase` feeds the reasoning string appended when the
/// contribution is material.
struct LookupToken {
    kind: CriterionKind,
    value: &'static str,
    strength: f64,
    phrase: String,
}

/// Per-category accumulator, one bucket per criteria group.
#[derive(Debug, Clone, Default)]
struct GroupTotals {
    interests: f64,
    academics: f64,
    personality: f64,
    values: f64,
    experience: f64,
    reasoning: Vec<String>,
}

impl GroupTotals {
    fn add(&mut self, group: CriterionGroup, points: f64) {
        match group {
            CriterionGroup::Interests => self.interests += points,
            CriterionGroup::Academics => self.academics += points,
            CriterionGroup::Personality => self.personality += points,
            CriterionGroup::Experience => self.experience += points,
        }
    }
}

impl<'a> CategoryScorer<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a CareerCatalog,
        criteria: &'a CriteriaTable,
        params: &'a EngineParams,
    ) -> Self {
        Self {
            catalog,
            criteria,
            params,
        }
    }

    /// Score all categories, sorted descending (ties keep catalog order).
    ///
    /// Unknown attribute values and table entries referencing unknown
    /// categories contribute nothing; neither is an error here.
    #[must_use]
    pub fn score(&self, profile: &Profile) -> Vec<CategoryScore> {
        let categories = self.catalog.categories();
        let mut totals = vec![GroupTotals::default(); categories.len()];

        // Interests, academics, personality: one generic lookup pass.
        self.accumulate(&self.profile_tokens(profile), &mut totals);

        // Values-alignment: similarity against each category's value profile.
        if let Some((student, mask)) = Self::student_values(profile) {
            for (idx, category) in categories.iter().enumerate() {
                if let Some(similarity) = student.similarity(&category.values, &mask) {
                    let points = similarity * self.params.groups.values * 100.0;
                    totals[idx].values = points;
                    if points >= self.params.reasoning_epsilon {
                        totals[idx].reasoning.push(format!(
                            "Your priorities line up with {} careers ({:.0}% aligned)",
                            category.name,
                            similarity * 100.0
                        ));
                    }
                }
            }
        }

        // One-time experience bonus, clamped at its own small ceiling.
        self.accumulate(&Self::experience_tokens(profile), &mut totals);

        let groups = &self.params.groups;
        let mut scores: Vec<CategoryScore> = totals
            .into_iter()
            .enumerate()
            .map(|(category_index, t)| {
                let score = t.interests.min(EngineParams::group_ceiling(groups.interests))
                    + t.academics.min(EngineParams::group_ceiling(groups.academics))
                    + t.personality.min(EngineParams::group_ceiling(groups.personality))
                    + t.values.min(EngineParams::group_ceiling(groups.values))
                    + t.experience
                        .min(EngineParams::group_ceiling(groups.experience_bonus));
                CategoryScore {
                    category_index,
                    score: score.clamp(0.0, 100.0),
                    reasoning: t.reasoning,
                }
            })
            .collect();

        // Stable sort: equal scores keep catalog order.
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scores
    }

    /// The generic weighted-aggregation primitive: look up each token,
    /// accumulate `partial * strength * group_weight * group_cap` points.
    fn accumulate(&self, tokens: &[LookupToken], totals: &mut [GroupTotals]) {
        for token in tokens {
            let group = token.kind.group();
            let (weight, cap) = self.group_scale(group);
            for hit in self.criteria.lookup(token.kind, token.value) {
                let Some(idx) = self.catalog.category_position(&hit.category) else {
                    continue;
                };
                let points = hit.weight * token.strength * weight * cap;
                if points <= 0.0 {
                    continue;
                }
                totals[idx].add(group, points);
                if points >= self.params.reasoning_epsilon {
                    let category = &self.catalog.categories()[idx];
                    totals[idx]
                        .reasoning
                        .push(Self::reason(token, category));
                }
            }
        }
    }

    fn group_scale(&self, group: CriterionGroup) -> (f64, f64) {
        let groups = &self.params.groups;
        let caps = &self.params.caps;
        match group {
            CriterionGroup::Interests => (groups.interests, caps.interest_match),
            CriterionGroup::Academics => (groups.academics, caps.subject_match),
            CriterionGroup::Personality => (groups.personality, caps.trait_match),
            CriterionGroup::Experience => (groups.experience_bonus, caps.experience_match),
        }
    }

    fn reason(token: &LookupToken, category: &Category) -> String {
        match token.kind {
            CriterionKind::WorkEnvironment | CriterionKind::WorkStyle => format!(
                "Your preference for {} points toward {}",
                token.phrase, category.name
            ),
            CriterionKind::ThinkingStyle => {
                format!("Your strength in {} suits {}", token.phrase, category.name)
            }
            CriterionKind::Subject => {
                format!("{} supports a future in {}", token.phrase, category.name)
            }
            CriterionKind::PersonalityTrait => {
                format!("Being {} is an asset in {}", token.phrase, category.name)
            }
            CriterionKind::Experience => format!(
                "Time spent {} gives you a head start in {}",
                token.phrase, category.name
            ),
        }
    }

    /// Tokens for the three lookup-based core groups, in the documented
    /// group order: interests, then academics, then personality.
    fn profile_tokens(&self, profile: &Profile) -> Vec<LookupToken> {
        let mut tokens = Vec::new();

        for env in &profile.work_environments {
            tokens.push(LookupToken {
                kind: CriterionKind::WorkEnvironment,
                value: env.token(),
                strength: 1.0,
                phrase: env.label().to_string(),
            });
        }
        for style in &profile.work_styles {
            tokens.push(LookupToken {
                kind: CriterionKind::WorkStyle,
                value: style.token(),
                strength: 1.0,
                phrase: style.label().to_string(),
            });
        }
        for thinking in &profile.thinking_styles {
            tokens.push(LookupToken {
                kind: CriterionKind::ThinkingStyle,
                value: thinking.token(),
                strength: 1.0,
                phrase: thinking.label().to_string(),
            });
        }

        for subject in &profile.favorite_subjects {
            let rating = profile.performance_in(*subject);
            let phrase = match rating {
                PerformanceRating::NotTaken => {
                    format!("Your interest in {}", subject.label())
                }
                rating => format!(
                    "Your {} results in {}",
                    rating.label(),
                    subject.label()
                ),
            };
            tokens.push(LookupToken {
                kind: CriterionKind::Subject,
                value: subject.token(),
                strength: rating.factor(),
                phrase,
            });
        }

        for personality in &profile.personality_traits {
            tokens.push(LookupToken {
                kind: CriterionKind::PersonalityTrait,
                value: personality.token(),
                strength: 1.0,
                phrase: personality.label().to_string(),
            });
        }

        tokens
    }

    fn experience_tokens(profile: &Profile) -> Vec<LookupToken> {
        profile
            .experiences
            .iter()
            .map(|exp| LookupToken {
                kind: CriterionKind::Experience,
                value: exp.token(),
                strength: 1.0,
                phrase: exp.label().to_string(),
            })
            .collect()
    }

    /// The student's declared value profile, if any dimension was declared.
    fn student_values(profile: &Profile) -> Option<(ValueProfile, ValueMask)> {
        let mask = ValueMask {
            income: profile.income_importance.is_some(),
            stability: profile.stability_importance.is_some(),
            helping: profile.helping_importance.is_some(),
            risk: profile.risk_tolerance.is_some(),
        };
        if !mask.any() {
            return None;
        }
        let values = ValueProfile {
            income: profile.income_importance.map_or(0.0, |v| v.scalar()),
            stability: profile.stability_importance.map_or(0.0, |v| v.scalar()),
            helping: profile.helping_importance.map_or(0.0, |v| v.scalar()),
            risk: profile.risk_tolerance.map_or(0.0, |v| v.scalar()),
        };
        Some((values, mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::model::{EducationCommitment, ImportanceLevel, Subject, WorkStyle};

    fn setup() -> (CareerCatalog, CriteriaTable, EngineParams) {
        (
            CareerCatalog::new(defaults::default_categories(), defaults::default_careers()),
            CriteriaTable::from_entries(defaults::default_criteria_entries()),
            EngineParams::reference(),
        )
    }

    fn score_of(scores: &[CategoryScore], catalog: &CareerCatalog, id: &str) -> f64 {
        let idx = catalog.category_position(id).expect("category exists");
        scores
            .iter()
            .find(|s| s.category_index == idx)
            .expect("score present")
            .score
    }

    #[test]
    fn test_empty_profile_scores_zero_everywhere() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let profile = Profile::new(11, EducationCommitment::HighSchool);
        let scores = scorer.score(&profile);
        assert_eq!(scores.len(), catalog.category_count());
        for s in &scores {
            assert_eq!(s.score, 0.0);
            assert!(s.reasoning.is_empty());
        }
    }

    #[test]
    fn test_hands_on_preference_boosts_skilled_trades() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let mut profile = Profile::new(11, EducationCommitment::Certificate);
        profile.work_styles.push(WorkStyle::HandsOn);

        let scores = scorer.score(&profile);
        let trades = score_of(&scores, &catalog, "skilled-trades");
        let business = score_of(&scores, &catalog, "business");
        assert!(trades > 0.0);
        assert!(trades > business);
        // 0.9 partial * 0.35 group weight * 30 cap
        assert!((trades - 9.45).abs() < 1e-9);
    }

    #[test]
    fn test_subject_contribution_scales_with_performance() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);

        let mut excellent = Profile::new(11, EducationCommitment::Bachelor);
        excellent.favorite_subjects.push(Subject::Biology);
        excellent
            .subject_performance
            .insert(Subject::Biology, PerformanceRating::Excellent);

        let mut struggling = excellent.clone();
        struggling
            .subject_performance
            .insert(Subject::Biology, PerformanceRating::Struggling);

        let hi = score_of(&scorer.score(&excellent), &catalog, "healthcare");
        let lo = score_of(&scorer.score(&struggling), &catalog, "healthcare");
        assert!(hi > lo);
        assert!(lo > 0.0);
    }

    #[test]
    fn test_values_alignment_contributes_without_lookup() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let mut profile = Profile::new(11, EducationCommitment::Bachelor);
        profile.helping_importance = Some(ImportanceLevel::Essential);

        let scores = scorer.score(&profile);
        // Healthcare's helping affinity is 1.0: perfect single-dimension match.
        let healthcare = score_of(&scores, &catalog, "healthcare");
        assert!((healthcare - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_clamped_to_100() {
        let (catalog, _, params) = setup();
        // A pathological table where one value is worth far more than a
        // whole group; the per-group ceilings must contain it.
        let criteria = CriteriaTable::from_entries(vec![crate::scoring::CriteriaEntry {
            criterion: CriterionKind::WorkStyle,
            value: "hands-on".to_string(),
            category: "skilled-trades".to_string(),
            weight: 1.0,
        }]);
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let mut profile = Profile::new(11, EducationCommitment::Certificate);
        for _ in 0..50 {
            profile.work_styles.push(WorkStyle::HandsOn);
        }
        let scores = scorer.score(&profile);
        let trades = score_of(&scores, &catalog, "skilled-trades");
        // Interests group ceiling is 35 points.
        assert!((trades - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_result_sorted_descending() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let mut profile = Profile::new(11, EducationCommitment::Bachelor);
        profile.work_styles.push(WorkStyle::Analytical);
        profile.favorite_subjects.push(Subject::ComputerScience);

        let scores = scorer.score(&profile);
        for pair in scores.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_reasoning_recorded_in_computation_order() {
        let (catalog, criteria, params) = setup();
        let scorer = CategoryScorer::new(&catalog, &criteria, &params);
        let mut profile = Profile::new(11, EducationCommitment::Certificate);
        profile.work_styles.push(WorkStyle::HandsOn);
        profile.favorite_subjects.push(Subject::ShopClass);

        let scores = scorer.score(&profile);
        let idx = catalog.category_position("skilled-trades").expect("exists");
        let trades = scores
            .iter()
            .find(|s| s.category_index == idx)
            .expect("present");
        assert_eq!(trades.reasoning.len(), 2);
        assert!(trades.reasoning[0].contains("hands-on work"));
        assert!(trades.reasoning[1].contains("shop class"));
    }
}
