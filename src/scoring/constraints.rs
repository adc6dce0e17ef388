//! Constraint evaluation: penalize careers that collide with a student's
//! real-world limits.
//!
//! All four rules are independent and additive. Evaluation never fails:
//! absent or unparseable constraint text means "no constraint declared".

use crate::config::EngineParams;
use crate::model::{CareerCatalog, Profile};

use super::career::ScoredCareer;

/// Keyword fragments that signal a declared physical limitation in the
/// free-text constraints field. The scan is deliberately forgiving; text
/// that matches nothing simply declares no constraint.
const PHYSICAL_LIMITATION_MARKERS: &[&str] = &[
    "physical",
    "injur",
    "disab",
    "lift",
    "mobility",
    "chronic",
    "wheelchair",
];

/// Applies penalty rules to raw-scored careers.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    catalog: &'a CareerCatalog,
    params: &'a EngineParams,
}

impl<'a> ConstraintEvaluator<'a> {
    #[must_use]
    pub fn new(catalog: &'a CareerCatalog, params: &'a EngineParams) -> Self {
        Self { catalog, params }
    }

    /// Apply every penalty rule to every career in place.
    ///
    /// `adjusted_score` becomes `max(0, raw_score - total_penalty)` and each
    /// fired rule appends one feasibility note, in rule order.
    pub fn apply(&self, profile: &Profile, scored: &mut [ScoredCareer]) {
        let rules = &self.params.penalties;
        let commitment = profile.education_commitment.level();
        let fast_income = profile.needs_fast_income();
        let limited_physically = declares_physical_limitation(profile.constraints.as_deref());
        let low_support = profile
            .support_level
            .is_some_and(|s| s.scalar() < rules.support_cutoff);

        for entry in scored.iter_mut() {
            let career = &self.catalog.careers()[entry.career_index];
            let mut penalty = 0.0;

            let required = career.preparation.level();
            if required > commitment {
                let gap = f64::from(required - commitment);
                penalty += rules.preparation_gap * gap;
                entry.feasibility_notes.push(format!(
                    "Requires {}, beyond the commitment you indicated",
                    career.preparation.label()
                ));
            }

            if fast_income && career.years_to_entry > rules.fast_entry_years {
                penalty +=
                    rules.slow_entry_per_year * (career.years_to_entry - rules.fast_entry_years);
                entry.feasibility_notes.push(format!(
                    "Typically takes about {:.0} years before earning, longer than your timeline",
                    career.years_to_entry
                ));
            }

            if limited_physically && career.physical_demand.ordinal() >= rules.demanding_ordinal {
                penalty += rules.physical_demand;
                entry.feasibility_notes.push(
                    "Physically demanding work may conflict with the limitation you noted"
                        .to_string(),
                );
            }

            if low_support && career.cost_level > rules.cost_cutoff {
                penalty += rules.cost_burden;
                entry.feasibility_notes.push(
                    "Training costs are high relative to the support you have available"
                        .to_string(),
                );
            }

            entry.adjusted_score = (entry.raw_score - penalty).max(0.0);
        }
    }
}

/// Forgiving keyword scan of the free-text constraints field.
#[must_use]
fn declares_physical_limitation(constraints: Option<&str>) -> bool {
    let Some(text) = constraints else {
        return false;
    };
    let lowered = text.to_lowercase();
    PHYSICAL_LIMITATION_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
