//! Student profile: the per-request input record.
//!
//! A profile is constructed once per matching request and is immutable
//! afterwards. Every field except `grade_level` and `education_commitment`
//! is optional and defaults to "nothing declared", which the scoring engine
//! treats as a zero contribution rather than an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A student's self-reported profile.
///
/// This is the exact record the upstream request-handling layer supplies.
/// Unknown enum values are a deserialization error at the boundary; inside
/// the engine, values that have no mapping entry simply contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// School grade or year indicator (e.g. 9-12)
    pub grade_level: u8,

    /// How far the student is willing to go with formal education
    pub education_commitment: EducationCommitment,

    /// Preferred work environments, in the order the student listed them
    #[serde(default)]
    pub work_environments: Vec<WorkEnvironment>,

    /// Preferred ways of working
    #[serde(default)]
    pub work_styles: Vec<WorkStyle>,

    /// Self-assessed thinking styles
    #[serde(default)]
    pub thinking_styles: Vec<ThinkingStyle>,

    /// Subjects the student enjoys
    #[serde(default)]
    pub favorite_subjects: Vec<Subject>,

    /// Performance rating per subject; subjects absent from the map are
    /// treated as not taken
    #[serde(default)]
    pub subject_performance: BTreeMap<Subject, PerformanceRating>,

    /// Self-described personality traits
    #[serde(default)]
    pub personality_traits: Vec<PersonalityTrait>,

    /// Real-world experiences the student has already had
    #[serde(default)]
    pub experiences: Vec<Experience>,

    /// How much earning potential matters
    #[serde(default)]
    pub income_importance: Option<ImportanceLevel>,

    /// How much job stability matters
    #[serde(default)]
    pub stability_importance: Option<ImportanceLevel>,

    /// How much helping other people matters
    #[serde(default)]
    pub helping_importance: Option<ImportanceLevel>,

    /// Appetite for career risk
    #[serde(default)]
    pub risk_tolerance: Option<RiskTolerance>,

    /// Financial/family support available for training
    #[serde(default)]
    pub support_level: Option<SupportLevel>,

    /// How soon the student needs to be earning
    #[serde(default)]
    pub urgency: Option<DecisionUrgency>,

    /// How settled the student already feels about a direction
    #[serde(default)]
    pub confidence: Option<ConfidenceLevel>,

    /// Free-text constraints ("I can't lift heavy things", ...)
    #[serde(default)]
    pub constraints: Option<String>,
}

impl Profile {
    /// Minimal valid profile: required fields only.
    #[must_use]
    pub fn new(grade_level: u8, education_commitment: EducationCommitment) -> Self {
        Self {
            grade_level,
            education_commitment,
            ..Self::default()
        }
    }

    /// Performance rating for a subject, defaulting to not-taken.
    #[must_use]
    pub fn performance_in(&self, subject: Subject) -> PerformanceRating {
        self.subject_performance
            .get(&subject)
            .copied()
            .unwrap_or(PerformanceRating::NotTaken)
    }

    /// True when the profile signals a need to start earning quickly.
    #[must_use]
    pub fn needs_fast_income(&self) -> bool {
        matches!(self.urgency, Some(DecisionUrgency::NeedsIncomeSoon))
    }
}

// ============================================================================
// Multi-valued attributes
// ============================================================================

/// Where the student would like to spend their working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum WorkEnvironment {
    Outdoor,
    Office,
    Workshop,
    Lab,
    Clinic,
    Classroom,
    Studio,
    Remote,
}

impl WorkEnvironment {
    pub const ALL: &'static [Self] = &[
        Self::Outdoor,
        Self::Office,
        Self::Workshop,
        Self::Lab,
        Self::Clinic,
        Self::Classroom,
        Self::Studio,
        Self::Remote,
    ];

    /// Stable token used as the mapping-table lookup key.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Outdoor => "outdoor",
            Self::Office => "office",
            Self::Workshop => "workshop",
            Self::Lab => "lab",
            Self::Clinic => "clinic",
            Self::Classroom => "classroom",
            Self::Studio => "studio",
            Self::Remote => "remote",
        }
    }

    /// Phrase used in reasoning strings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Outdoor => "working outdoors",
            Self::Office => "an office setting",
            Self::Workshop => "a workshop setting",
            Self::Lab => "a laboratory setting",
            Self::Clinic => "a clinical setting",
            Self::Classroom => "a classroom setting",
            Self::Studio => "a studio setting",
            Self::Remote => "working remotely",
        }
    }
}

/// How the student prefers to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum WorkStyle {
    HandsOn,
    Analytical,
    Creative,
    Collaborative,
    Independent,
    Leading,
}

impl WorkStyle {
    pub const ALL: &'static [Self] = &[
        Self::HandsOn,
        Self::Analytical,
        Self::Creative,
        Self::Collaborative,
        Self::Independent,
        Self::Leading,
    ];

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::HandsOn => "hands-on",
            Self::Analytical => "analytical",
            Self::Creative => "creative",
            Self::Collaborative => "collaborative",
            Self::Independent => "independent",
            Self::Leading => "leading",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HandsOn => "hands-on work",
            Self::Analytical => "analytical work",
            Self::Creative => "creative work",
            Self::Collaborative => "collaborative work",
            Self::Independent => "independent work",
            Self::Leading => "leading others",
        }
    }
}

/// Self-assessed thinking style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ThinkingStyle {
    Logical,
    Verbal,
    Visual,
    Numerical,
    Practical,
    Abstract,
}

impl ThinkingStyle {
    pub const ALL: &'static [Self] = &[
        Self::Logical,
        Self::Verbal,
        Self::Visual,
        Self::Numerical,
        Self::Practical,
        Self::Abstract,
    ];

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Logical => "logical",
            Self::Verbal => "verbal",
            Self::Visual => "visual",
            Self::Numerical => "numerical",
            Self::Practical => "practical",
            Self::Abstract => "abstract",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Logical => "logical thinking",
            Self::Verbal => "verbal reasoning",
            Self::Visual => "visual thinking",
            Self::Numerical => "numerical reasoning",
            Self::Practical => "practical problem-solving",
            Self::Abstract => "abstract thinking",
        }
    }
}

/// School subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Math,
    Biology,
    Chemistry,
    Physics,
    ComputerScience,
    English,
    History,
    Art,
    Music,
    Business,
    ShopClass,
    PhysicalEducation,
    ForeignLanguage,
}

impl Subject {
    pub const ALL: &'static [Self] = &[
        Self::Math,
        Self::Biology,
        Self::Chemistry,
        Self::Physics,
        Self::ComputerScience,
        Self::English,
        Self::History,
        Self::Art,
        Self::Music,
        Self::Business,
        Self::ShopClass,
        Self::PhysicalEducation,
        Self::ForeignLanguage,
    ];

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Biology => "biology",
            Self::Chemistry => "chemistry",
            Self::Physics => "physics",
            Self::ComputerScience => "computer-science",
            Self::English => "english",
            Self::History => "history",
            Self::Art => "art",
            Self::Music => "music",
            Self::Business => "business",
            Self::ShopClass => "shop-class",
            Self::PhysicalEducation => "physical-education",
            Self::ForeignLanguage => "foreign-language",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Biology => "biology",
            Self::Chemistry => "chemistry",
            Self::Physics => "physics",
            Self::ComputerScience => "computer science",
            Self::English => "English",
            Self::History => "history",
            Self::Art => "art",
            Self::Music => "music",
            Self::Business => "business studies",
            Self::ShopClass => "shop class",
            Self::PhysicalEducation => "physical education",
            Self::ForeignLanguage => "foreign languages",
        }
    }
}

/// How the student performed in a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    Struggling,
    NotTaken,
}

impl PerformanceRating {
    /// Multiplier applied to academic-interest contributions.
    ///
    /// Interest in a subject the student has not taken yet still counts for
    /// something, but less than demonstrated ability.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Excellent => 1.0,
            Self::Good => 0.75,
            Self::Average => 0.5,
            Self::Struggling => 0.25,
            Self::NotTaken => 0.4,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Struggling => "struggling",
            Self::NotTaken => "not taken yet",
        }
    }
}

/// Self-described personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum PersonalityTrait {
    Curious,
    Patient,
    Empathetic,
    Competitive,
    Organized,
    Adventurous,
    DetailOriented,
    Outgoing,
    Calm,
    Persistent,
}

impl PersonalityTrait {
    pub const ALL: &'static [Self] = &[
        Self::Curious,
        Self::Patient,
        Self::Empathetic,
        Self::Competitive,
        Self::Organized,
        Self::Adventurous,
        Self::DetailOriented,
        Self::Outgoing,
        Self::Calm,
        Self::Persistent,
    ];

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Curious => "curious",
            Self::Patient => "patient",
            Self::Empathetic => "empathetic",
            Self::Competitive => "competitive",
            Self::Organized => "organized",
            Self::Adventurous => "adventurous",
            Self::DetailOriented => "detail-oriented",
            Self::Outgoing => "outgoing",
            Self::Calm => "calm",
            Self::Persistent => "persistent",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        // Token doubles as the natural-language adjective.
        self.token()
    }
}

/// Real-world exposure the student already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    Volunteering,
    PartTimeJob,
    BuildingProjects,
    CaringForOthers,
    OutdoorWork,
    Performing,
    Tutoring,
    Coding,
}

impl Experience {
    pub const ALL: &'static [Self] = &[
        Self::Volunteering,
        Self::PartTimeJob,
        Self::BuildingProjects,
        Self::CaringForOthers,
        Self::OutdoorWork,
        Self::Performing,
        Self::Tutoring,
        Self::Coding,
    ];

    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Volunteering => "volunteering",
            Self::PartTimeJob => "part-time-job",
            Self::BuildingProjects => "building-projects",
            Self::CaringForOthers => "caring-for-others",
            Self::OutdoorWork => "outdoor-work",
            Self::Performing => "performing",
            Self::Tutoring => "tutoring",
            Self::Coding => "coding",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Volunteering => "volunteering",
            Self::PartTimeJob => "holding a part-time job",
            Self::BuildingProjects => "building things",
            Self::CaringForOthers => "caring for others",
            Self::OutdoorWork => "outdoor work",
            Self::Performing => "performing",
            Self::Tutoring => "tutoring",
            Self::Coding => "coding",
        }
    }
}

// ============================================================================
// Single-valued preferences
// ============================================================================

/// Highest level of formal education the student is willing to pursue.
///
/// Shares an ordinal ladder with
/// [`PreparationLevel`](crate::model::PreparationLevel) so the constraint
/// evaluator can compare the two directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum EducationCommitment {
    #[default]
    HighSchool,
    Certificate,
    Associate,
    Bachelor,
    Graduate,
}

impl EducationCommitment {
    /// Position on the shared preparation ladder.
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::HighSchool => 0,
            Self::Certificate => 1,
            Self::Associate => 2,
            Self::Bachelor => 3,
            Self::Graduate => 4,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighSchool => "high school",
            Self::Certificate => "a certificate program",
            Self::Associate => "an associate degree",
            Self::Bachelor => "a bachelor's degree",
            Self::Graduate => "graduate school",
        }
    }
}

/// How much a value dimension matters to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ImportanceLevel {
    NotImportant,
    SomewhatImportant,
    Important,
    Essential,
}

impl ImportanceLevel {
    /// Encode to a scalar in [0, 1] for value-profile similarity.
    #[must_use]
    pub fn scalar(&self) -> f64 {
        match self {
            Self::NotImportant => 0.0,
            Self::SomewhatImportant => 1.0 / 3.0,
            Self::Important => 2.0 / 3.0,
            Self::Essential => 1.0,
        }
    }
}

/// Appetite for career risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    Averse,
    Cautious,
    Moderate,
    Seeking,
}

impl RiskTolerance {
    /// Encode to a scalar in [0, 1] for value-profile similarity.
    #[must_use]
    pub fn scalar(&self) -> f64 {
        match self {
            Self::Averse => 0.0,
            Self::Cautious => 1.0 / 3.0,
            Self::Moderate => 2.0 / 3.0,
            Self::Seeking => 1.0,
        }
    }
}

/// Financial/family support available for education and training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SupportLevel {
    Minimal,
    Limited,
    Moderate,
    Strong,
}

impl SupportLevel {
    /// Encode to a scalar in [0, 1]; the cost-burden rule fires below 0.5.
    #[must_use]
    pub const fn scalar(&self) -> f64 {
        match self {
            Self::Minimal => 0.0,
            Self::Limited => 0.3,
            Self::Moderate => 0.6,
            Self::Strong => 1.0,
        }
    }
}

/// How soon the student needs to be earning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum DecisionUrgency {
    Exploring,
    SoonPreferred,
    NeedsIncomeSoon,
}

/// How settled the student already feels about a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceLevel {
    Unsure,
    Leaning,
    Confident,
}
