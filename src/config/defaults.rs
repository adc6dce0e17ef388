//! Built-in catalog, criteria tables, and disclaimer.
//!
//! These defaults make the tool usable with zero configuration; a config
//! file can replace any of them wholesale. Careers and categories keep
//! their declaration order, which downstream stages use as the
//! deterministic tie-breaker.

use crate::model::{Career, Category, PhysicalDemand, PreparationLevel, ValueProfile};
use crate::scoring::{CriteriaEntry, CriterionKind};

/// Shown alongside every result, verbatim.
pub const DISCLAIMER: &str = "These suggestions are a starting point based on what you shared, \
not a verdict. Interests change, and plenty of people thrive in careers no quiz would have \
picked for them. Talk the options over with a counselor, family, or someone working in the \
field before making decisions.";

fn category(id: &str, name: &str, values: [f64; 4]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        values: ValueProfile {
            income: values[0],
            stability: values[1],
            helping: values[2],
            risk: values[3],
        },
    }
}

/// The default category catalog.
///
/// Value-profile order: income, stability, helping, risk.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        category("technology", "Technology & Engineering", [0.8, 0.7, 0.4, 0.5]),
        category("healthcare", "Healthcare", [0.7, 0.9, 1.0, 0.3]),
        category("skilled-trades", "Skilled Trades", [0.6, 0.8, 0.5, 0.4]),
        category("business", "Business & Finance", [0.9, 0.6, 0.3, 0.7]),
        category("creative", "Creative & Media", [0.4, 0.3, 0.5, 0.8]),
        category("education", "Education & Social Services", [0.4, 0.8, 1.0, 0.2]),
        category("science", "Science & Research", [0.6, 0.6, 0.6, 0.5]),
        category("public-service", "Public Service & Safety", [0.5, 0.9, 0.9, 0.6]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn career(
    id: &str,
    title: &str,
    primary: &str,
    secondary: Option<&str>,
    preparation: PreparationLevel,
    years_to_entry: f64,
    physical_demand: PhysicalDemand,
    cost_level: f64,
    challenge: u8,
) -> Career {
    Career {
        id: id.to_string(),
        title: title.to_string(),
        category: primary.to_string(),
        secondary_category: secondary.map(String::from),
        preparation,
        years_to_entry,
        physical_demand,
        cost_level,
        challenge,
    }
}

/// The default career catalog.
#[must_use]
pub fn default_careers() -> Vec<Career> {
    use PhysicalDemand::{High, Low, Moderate};
    use PreparationLevel::{Associate, Bachelor, Certificate, Graduate, OnTheJob};

    vec![
        career("software-developer", "Software Developer", "technology", Some("business"), Bachelor, 4.0, Low, 0.7, 2),
        career("web-developer", "Web Developer", "technology", Some("creative"), Certificate, 1.0, Low, 0.3, 1),
        career("data-analyst", "Data Analyst", "technology", Some("business"), Bachelor, 4.0, Low, 0.6, 2),
        career("registered-nurse", "Registered Nurse", "healthcare", Some("science"), Bachelor, 4.0, High, 0.6, 2),
        career("medical-assistant", "Medical Assistant", "healthcare", None, Certificate, 1.0, Moderate, 0.3, 1),
        career("paramedic", "Paramedic", "healthcare", Some("public-service"), Certificate, 1.0, High, 0.3, 1),
        career("electrician", "Electrician", "skilled-trades", Some("technology"), Certificate, 1.0, High, 0.2, 1),
        career("welder", "Welder", "skilled-trades", None, Certificate, 0.5, High, 0.2, 1),
        career("hvac-technician", "HVAC Technician", "skilled-trades", None, Certificate, 1.0, High, 0.2, 1),
        career("carpenter", "Carpenter", "skilled-trades", None, OnTheJob, 0.5, High, 0.1, 1),
        career("accountant", "Accountant", "business", None, Bachelor, 4.0, Low, 0.6, 2),
        career("marketing-coordinator", "Marketing Coordinator", "business", Some("creative"), Bachelor, 4.0, Low, 0.6, 1),
        career("graphic-designer", "Graphic Designer", "creative", Some("technology"), Associate, 2.0, Low, 0.4, 1),
        career("multimedia-producer", "Multimedia Producer", "creative", Some("business"), Associate, 2.0, Low, 0.4, 2),
        career("teacher", "Teacher", "education", None, Bachelor, 4.0, Low, 0.6, 2),
        career("social-worker", "Social Worker", "education", Some("public-service"), Bachelor, 4.0, Low, 0.6, 2),
        career("lab-technician", "Laboratory Technician", "science", Some("healthcare"), Associate, 2.0, Moderate, 0.4, 1),
        career("research-scientist", "Research Scientist", "science", None, Graduate, 8.0, Low, 0.9, 3),
        career("police-officer", "Police Officer", "public-service", None, Certificate, 0.5, High, 0.2, 1),
        career("firefighter", "Firefighter", "public-service", Some("healthcare"), Certificate, 1.0, High, 0.2, 1),
    ]
}

fn map(criterion: CriterionKind, value: &str, category: &str, weight: f64) -> CriteriaEntry {
    CriteriaEntry {
        criterion,
        value: value.to_string(),
        category: category.to_string(),
        weight,
    }
}

/// The default criteria mapping tables, as flat (criterion, value,
/// category, weight) tuples.
#[must_use]
pub fn default_criteria_entries() -> Vec<CriteriaEntry> {
    use CriterionKind::{
        Experience, PersonalityTrait, Subject, ThinkingStyle, WorkEnvironment, WorkStyle,
    };

    vec![
        // Work environments
        map(WorkEnvironment, "outdoor", "skilled-trades", 0.8),
        map(WorkEnvironment, "outdoor", "public-service", 0.6),
        map(WorkEnvironment, "office", "business", 0.8),
        map(WorkEnvironment, "office", "technology", 0.5),
        map(WorkEnvironment, "workshop", "skilled-trades", 0.9),
        map(WorkEnvironment, "workshop", "technology", 0.4),
        map(WorkEnvironment, "lab", "science", 0.9),
        map(WorkEnvironment, "lab", "healthcare", 0.5),
        map(WorkEnvironment, "clinic", "healthcare", 0.9),
        map(WorkEnvironment, "classroom", "education", 0.9),
        map(WorkEnvironment, "studio", "creative", 0.9),
        map(WorkEnvironment, "remote", "technology", 0.7),
        map(WorkEnvironment, "remote", "creative", 0.4),
        map(WorkEnvironment, "remote", "business", 0.4),
        // Work styles
        map(WorkStyle, "hands-on", "skilled-trades", 0.9),
        map(WorkStyle, "hands-on", "healthcare", 0.4),
        map(WorkStyle, "hands-on", "technology", 0.3),
        map(WorkStyle, "analytical", "technology", 0.8),
        map(WorkStyle, "analytical", "science", 0.8),
        map(WorkStyle, "analytical", "business", 0.5),
        map(WorkStyle, "creative", "creative", 0.9),
        map(WorkStyle, "creative", "technology", 0.3),
        map(WorkStyle, "collaborative", "education", 0.6),
        map(WorkStyle, "collaborative", "healthcare", 0.6),
        map(WorkStyle, "collaborative", "business", 0.5),
        map(WorkStyle, "collaborative", "public-service", 0.5),
        map(WorkStyle, "independent", "technology", 0.5),
        map(WorkStyle, "independent", "creative", 0.5),
        map(WorkStyle, "independent", "science", 0.4),
        map(WorkStyle, "leading", "business", 0.8),
        map(WorkStyle, "leading", "education", 0.4),
        map(WorkStyle, "leading", "public-service", 0.5),
        // Thinking styles
        map(ThinkingStyle, "logical", "technology", 0.8),
        map(ThinkingStyle, "logical", "science", 0.7),
        map(ThinkingStyle, "verbal", "education", 0.7),
        map(ThinkingStyle, "verbal", "business", 0.5),
        map(ThinkingStyle, "verbal", "creative", 0.4),
        map(ThinkingStyle, "visual", "creative", 0.8),
        map(ThinkingStyle, "visual", "technology", 0.4),
        map(ThinkingStyle, "numerical", "business", 0.8),
        map(ThinkingStyle, "numerical", "science", 0.6),
        map(ThinkingStyle, "numerical", "technology", 0.6),
        map(ThinkingStyle, "practical", "skilled-trades", 0.8),
        map(ThinkingStyle, "practical", "healthcare", 0.4),
        map(ThinkingStyle, "practical", "public-service", 0.4),
        map(ThinkingStyle, "abstract", "science", 0.7),
        map(ThinkingStyle, "abstract", "creative", 0.5),
        // Subjects
        map(Subject, "math", "technology", 0.7),
        map(Subject, "math", "business", 0.6),
        map(Subject, "math", "science", 0.6),
        map(Subject, "biology", "healthcare", 0.8),
        map(Subject, "biology", "science", 0.7),
        map(Subject, "chemistry", "science", 0.8),
        map(Subject, "chemistry", "healthcare", 0.5),
        map(Subject, "physics", "science", 0.7),
        map(Subject, "physics", "technology", 0.6),
        map(Subject, "computer-science", "technology", 0.9),
        map(Subject, "english", "education", 0.6),
        map(Subject, "english", "creative", 0.5),
        map(Subject, "english", "business", 0.4),
        map(Subject, "history", "education", 0.6),
        map(Subject, "history", "public-service", 0.4),
        map(Subject, "art", "creative", 0.9),
        map(Subject, "music", "creative", 0.7),
        map(Subject, "business", "business", 0.9),
        map(Subject, "shop-class", "skilled-trades", 0.9),
        map(Subject, "physical-education", "public-service", 0.6),
        map(Subject, "physical-education", "healthcare", 0.4),
        map(Subject, "foreign-language", "education", 0.5),
        map(Subject, "foreign-language", "business", 0.4),
        // Personality traits
        map(PersonalityTrait, "curious", "science", 0.7),
        map(PersonalityTrait, "curious", "technology", 0.5),
        map(PersonalityTrait, "patient", "education", 0.7),
        map(PersonalityTrait, "patient", "healthcare", 0.6),
        map(PersonalityTrait, "empathetic", "healthcare", 0.8),
        map(PersonalityTrait, "empathetic", "education", 0.7),
        map(PersonalityTrait, "empathetic", "public-service", 0.5),
        map(PersonalityTrait, "competitive", "business", 0.7),
        map(PersonalityTrait, "organized", "business", 0.6),
        map(PersonalityTrait, "organized", "healthcare", 0.4),
        map(PersonalityTrait, "organized", "technology", 0.4),
        map(PersonalityTrait, "adventurous", "public-service", 0.6),
        map(PersonalityTrait, "adventurous", "skilled-trades", 0.4),
        map(PersonalityTrait, "adventurous", "creative", 0.4),
        map(PersonalityTrait, "detail-oriented", "technology", 0.6),
        map(PersonalityTrait, "detail-oriented", "science", 0.6),
        map(PersonalityTrait, "detail-oriented", "skilled-trades", 0.4),
        map(PersonalityTrait, "outgoing", "business", 0.6),
        map(PersonalityTrait, "outgoing", "education", 0.5),
        map(PersonalityTrait, "outgoing", "public-service", 0.4),
        map(PersonalityTrait, "calm", "healthcare", 0.6),
        map(PersonalityTrait, "calm", "public-service", 0.6),
        map(PersonalityTrait, "persistent", "skilled-trades", 0.5),
        map(PersonalityTrait, "persistent", "science", 0.5),
        map(PersonalityTrait, "persistent", "technology", 0.4),
        // Experiences (one-time bonus group)
        map(Experience, "volunteering", "public-service", 0.7),
        map(Experience, "volunteering", "education", 0.5),
        map(Experience, "volunteering", "healthcare", 0.5),
        map(Experience, "part-time-job", "business", 0.5),
        map(Experience, "building-projects", "skilled-trades", 0.7),
        map(Experience, "building-projects", "technology", 0.6),
        map(Experience, "caring-for-others", "healthcare", 0.8),
        map(Experience, "caring-for-others", "education", 0.5),
        map(Experience, "outdoor-work", "skilled-trades", 0.6),
        map(Experience, "outdoor-work", "public-service", 0.4),
        map(Experience, "performing", "creative", 0.8),
        map(Experience, "tutoring", "education", 0.8),
        map(Experience, "coding", "technology", 0.9),
    ]
}
