//! Benchmarks for the full match pipeline.

use career_compass::model::{
    EducationCommitment, Experience, ImportanceLevel, PerformanceRating, PersonalityTrait,
    Profile, RiskTolerance, Subject, ThinkingStyle, WorkEnvironment, WorkStyle,
};
use career_compass::MatchEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn rich_profile() -> Profile {
    let mut profile = Profile::new(11, EducationCommitment::Bachelor);
    profile.work_environments = vec![WorkEnvironment::Lab, WorkEnvironment::Remote];
    profile.work_styles = vec![WorkStyle::Analytical, WorkStyle::Independent];
    profile.thinking_styles = vec![ThinkingStyle::Logical, ThinkingStyle::Numerical];
    profile.favorite_subjects = vec![Subject::Math, Subject::ComputerScience, Subject::Physics];
    profile
        .subject_performance
        .insert(Subject::Math, PerformanceRating::Excellent);
    profile
        .subject_performance
        .insert(Subject::ComputerScience, PerformanceRating::Good);
    profile.personality_traits = vec![PersonalityTrait::Curious, PersonalityTrait::DetailOriented];
    profile.experiences = vec![Experience::Coding];
    profile.income_importance = Some(ImportanceLevel::Important);
    profile.stability_importance = Some(ImportanceLevel::Important);
    profile.helping_importance = Some(ImportanceLevel::SomewhatImportant);
    profile.risk_tolerance = Some(RiskTolerance::Moderate);
    profile
}

fn bench_recommend(c: &mut Criterion) {
    let engine = MatchEngine::with_defaults();
    let profile = rich_profile();

    c.bench_function("recommend_rich_profile", |b| {
        b.iter(|| black_box(engine.recommend(black_box(&profile))));
    });

    c.bench_function("recommend_empty_profile", |b| {
        let empty = Profile::new(11, EducationCommitment::HighSchool);
        b.iter(|| black_box(engine.recommend(black_box(&empty))));
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
