//! Tier classification over constraint-adjusted careers.
//!
//! Each cutoff is dual: an absolute floor and a fraction of the best score
//! in the current result set. A uniformly weak field still yields a usable
//! top tier, and a uniformly strong field doesn't drag clearly worse
//! options up into it.

use crate::config::EngineParams;
use crate::model::CareerCatalog;

use super::career::ScoredCareer;

/// The three ordered output buckets, each sorted descending and capped.
#[derive(Debug, Clone, Default)]
pub struct TierAssignment {
    pub top: Vec<ScoredCareer>,
    pub mid: Vec<ScoredCareer>,
    pub stretch: Vec<ScoredCareer>,
}

/// Partitions adjusted careers into tiers.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a CareerCatalog,
    params: &'a EngineParams,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(catalog: &'a CareerCatalog, params: &'a EngineParams) -> Self {
        Self { catalog, params }
    }

    /// Assign each career to the highest tier it qualifies for.
    ///
    /// Careers are visited in descending adjusted-score order (ties keep
    /// catalog order), so when a tier reaches its cap the overflow cascades
    /// into the next tier it still qualifies for; careers qualifying for no
    /// tier are excluded. A career with any feasibility note never enters
    /// the top tier.
    #[must_use]
    pub fn classify(&self, mut scored: Vec<ScoredCareer>) -> TierAssignment {
        let thresholds = &self.params.thresholds;
        let caps = &self.params.tier_caps;

        // Guarded against an empty or all-zero field: relative becomes 0.
        let top_score = scored
            .iter()
            .map(|s| s.adjusted_score)
            .fold(0.0_f64, f64::max);

        scored.sort_by(|a, b| {
            b.adjusted_score
                .partial_cmp(&a.adjusted_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut tiers = TierAssignment::default();
        for entry in scored {
            let adjusted = entry.adjusted_score;
            let relative = if top_score > 0.0 {
                adjusted / top_score
            } else {
                0.0
            };
            let career = &self.catalog.careers()[entry.career_index];

            let qualifies_top = (adjusted >= thresholds.top_absolute
                || relative >= thresholds.top_relative)
                && entry.feasibility_notes.is_empty();
            let qualifies_mid =
                adjusted >= thresholds.mid_absolute || relative >= thresholds.mid_relative;
            let qualifies_stretch = adjusted >= thresholds.stretch_absolute
                || career.challenge >= thresholds.stretch_challenge;

            if qualifies_top && tiers.top.len() < caps.top {
                tiers.top.push(entry);
            } else if (qualifies_top || qualifies_mid) && tiers.mid.len() < caps.mid {
                tiers.mid.push(entry);
            } else if (qualifies_top || qualifies_mid || qualifies_stretch)
                && tiers.stretch.len() < caps.stretch
            {
                tiers.stretch.push(entry);
            }
        }
        tiers
    }
}
