//! Integration tests for the matching engine.
//!
//! These exercise the full Profile -> report pipeline through the public
//! API, including the behavioral scenarios the engine guarantees.

use career_compass::config::{defaults, EngineParams};
use career_compass::model::{
    Career, CareerCatalog, EducationCommitment, PhysicalDemand, PreparationLevel, Profile,
    Subject, WorkEnvironment, WorkStyle,
};
use career_compass::scoring::CriteriaTable;
use career_compass::{MatchEngine, MatchReport};

// ============================================================================
// Helpers
// ============================================================================

fn default_criteria() -> CriteriaTable {
    CriteriaTable::from_entries(defaults::default_criteria_entries())
}

fn engine_with_careers(careers: Vec<Career>) -> MatchEngine {
    let catalog = CareerCatalog::new(defaults::default_categories(), careers);
    MatchEngine::new(catalog, default_criteria(), EngineParams::reference())
        .expect("test catalog must validate")
}

fn career(id: &str, primary: &str, preparation: PreparationLevel) -> Career {
    Career {
        id: id.to_string(),
        title: id.to_uppercase(),
        category: primary.to_string(),
        secondary_category: None,
        preparation,
        years_to_entry: 1.0,
        physical_demand: PhysicalDemand::Low,
        cost_level: 0.2,
        challenge: 0,
    }
}

fn all_ids(report: &MatchReport) -> Vec<String> {
    report
        .tiers()
        .flat_map(|(_, entries)| entries.iter().map(|e| e.id.clone()))
        .collect()
}

fn trades_heavy_profile() -> Profile {
    use career_compass::model::{Experience, PerformanceRating, PersonalityTrait, ThinkingStyle};

    let mut profile = Profile::new(11, EducationCommitment::Certificate);
    profile.work_environments.push(WorkEnvironment::Workshop);
    profile.work_environments.push(WorkEnvironment::Outdoor);
    profile.work_styles.push(WorkStyle::HandsOn);
    profile.thinking_styles.push(ThinkingStyle::Practical);
    profile.favorite_subjects.push(Subject::ShopClass);
    profile
        .subject_performance
        .insert(Subject::ShopClass, PerformanceRating::Excellent);
    profile.personality_traits.push(PersonalityTrait::DetailOriented);
    profile.personality_traits.push(PersonalityTrait::Persistent);
    profile.personality_traits.push(PersonalityTrait::Adventurous);
    profile.experiences.push(Experience::BuildingProjects);
    profile.experiences.push(Experience::OutdoorWork);
    profile
}

// ============================================================================
// Scenario: hands-on certificate profile
// ============================================================================

#[test]
fn hands_on_certificate_profile_tops_matching_career() {
    let engine = engine_with_careers(vec![
        career("hands-on-cert", "skilled-trades", PreparationLevel::Certificate),
        career("unrelated-bachelor", "business", PreparationLevel::Bachelor),
    ]);

    let mut profile = Profile::new(11, EducationCommitment::Certificate);
    profile.work_styles.push(WorkStyle::HandsOn);

    let report = engine.recommend(&profile);

    let top_ids: Vec<&str> = report.top.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(top_ids, ["hands-on-cert"]);
    assert!(report.top[0].feasibility_notes.is_empty());

    // The unrelated bachelor's option scores nothing and is penalized for
    // the preparation gap; it must not appear anywhere.
    assert!(!all_ids(&report).contains(&"unrelated-bachelor".to_string()));
}

// ============================================================================
// Scenario: physical limitation vs demanding career
// ============================================================================

#[test]
fn physical_limitation_always_notes_and_penalizes_20_points() {
    let mut demanding = career("demanding", "skilled-trades", PreparationLevel::Certificate);
    demanding.physical_demand = PhysicalDemand::High;
    let engine = engine_with_careers(vec![demanding]);

    let unrestricted = trades_heavy_profile();
    let mut limited = trades_heavy_profile();
    limited.constraints = Some("I have a knee injury and limited mobility".to_string());

    let baseline = engine.recommend(&unrestricted);
    let penalized = engine.recommend(&limited);

    let baseline_entry = &baseline.top[0];
    assert!(baseline_entry.feasibility_notes.is_empty());

    // Strong profile keeps the career on the board, but never in the top tier.
    assert!(penalized.top.is_empty());
    let entry = penalized
        .tiers()
        .flat_map(|(_, e)| e)
        .find(|e| e.id == "demanding")
        .expect("career must still be classified");
    assert_eq!(entry.feasibility_notes.len(), 1);
    assert_eq!(i32::from(baseline_entry.score) - i32::from(entry.score), 20);
}

#[test]
fn physical_limitation_notes_even_with_no_matching_attributes() {
    let mut demanding = career("demanding", "skilled-trades", PreparationLevel::Certificate);
    demanding.physical_demand = PhysicalDemand::High;
    demanding.challenge = 2; // keeps the zero-scored career classifiable
    let engine = engine_with_careers(vec![demanding]);

    let mut profile = Profile::new(11, EducationCommitment::Certificate);
    profile.constraints = Some("physical limitation".to_string());

    let report = engine.recommend(&profile);
    let entry = report
        .stretch
        .iter()
        .find(|e| e.id == "demanding")
        .expect("challenge admits it to the stretch tier");
    assert_eq!(entry.score, 0);
    assert_eq!(entry.feasibility_notes.len(), 1);
}

// ============================================================================
// Scenario: empty profile
// ============================================================================

#[test]
fn empty_profile_yields_low_information_but_valid_output() {
    let engine = MatchEngine::with_defaults();
    let report = engine.recommend(&Profile::new(11, EducationCommitment::HighSchool));

    for insight in &report.categories {
        assert_eq!(insight.score, 0, "category {} should score 0", insight.id);
        assert!(insight.reasoning.is_empty());
    }
    assert!(report.top.is_empty());
    assert!(report.mid.is_empty());
    // Only challenge-driven stretch admissions remain possible.
    assert!(report.stretch.len() <= engine.params().tier_caps.stretch);
    for entry in &report.stretch {
        assert_eq!(entry.score, 0);
    }
}

#[test]
fn empty_catalog_yields_empty_tiers() {
    let engine = engine_with_careers(vec![]);
    let report = engine.recommend(&trades_heavy_profile());
    assert!(report.is_empty());
    // Category scores are still produced for the insight list.
    assert!(!report.categories.is_empty());
}

// ============================================================================
// Preparation-mismatch monotonicity
// ============================================================================

#[test]
fn raising_preparation_above_commitment_strictly_lowers_adjusted_score() {
    let engine = engine_with_careers(vec![
        career("matching-level", "skilled-trades", PreparationLevel::Certificate),
        career("one-step-above", "skilled-trades", PreparationLevel::Associate),
        career("two-steps-above", "skilled-trades", PreparationLevel::Bachelor),
    ]);

    let report = engine.recommend(&trades_heavy_profile());
    let score_of = |id: &str| {
        report
            .tiers()
            .flat_map(|(_, e)| e)
            .find(|e| e.id == id)
            .map(|e| e.score)
    };

    let matching = score_of("matching-level").expect("classified");
    let above = score_of("one-step-above").expect("classified");
    assert!(matching > above);
    if let Some(far_above) = score_of("two-steps-above") {
        assert!(above > far_above || far_above == 0);
    }
}

// ============================================================================
// Output-contract checks
// ============================================================================

#[test]
fn tiers_are_disjoint_and_sorted() {
    let engine = MatchEngine::with_defaults();
    let mut profile = trades_heavy_profile();
    profile.work_styles.push(WorkStyle::Analytical);
    profile.favorite_subjects.push(Subject::ComputerScience);

    let report = engine.recommend(&profile);
    let ids = all_ids(&report);
    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(ids.len(), unique.len(), "no id may appear in two tiers");

    for (_, entries) in report.tiers() {
        for pair in entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn top_tier_never_carries_feasibility_notes() {
    let engine = MatchEngine::with_defaults();
    let mut profile = trades_heavy_profile();
    profile.constraints = Some("can't do heavy lifting".to_string());
    profile.support_level = Some(career_compass::model::SupportLevel::Minimal);

    let report = engine.recommend(&profile);
    for entry in &report.top {
        assert!(entry.feasibility_notes.is_empty());
    }
}

#[test]
fn tier_caps_are_respected() {
    let engine = MatchEngine::with_defaults();
    let mut profile = trades_heavy_profile();
    profile.helping_importance = Some(career_compass::model::ImportanceLevel::Important);
    profile.risk_tolerance = Some(career_compass::model::RiskTolerance::Moderate);

    let report = engine.recommend(&profile);
    let caps = engine.params().tier_caps;
    assert!(report.top.len() <= caps.top);
    assert!(report.mid.len() <= caps.mid);
    assert!(report.stretch.len() <= caps.stretch);
}

#[test]
fn report_carries_disclaimer_and_category_insights() {
    let engine = MatchEngine::with_defaults();
    let report = engine.recommend(&trades_heavy_profile());
    assert_eq!(report.disclaimer, defaults::DISCLAIMER);
    assert!(!report.categories.is_empty());
    assert!(report.categories.len() <= engine.params().category_limit);
    // Insights arrive sorted descending.
    for pair in report.categories.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // The strongest category for this profile must be the trades.
    assert_eq!(report.categories[0].id, "skilled-trades");
}
