//! Engine parameter types.
//!
//! Every threshold and penalty magnitude the engine uses is a named,
//! externally configurable parameter here. The defaults reproduce the
//! reference behavior exactly; a config file may override any subset.

use serde::{Deserialize, Serialize};

/// Relative share of each criteria group in the category score.
///
/// The four core groups sum to 1.0; the experience bonus sits on top and is
/// capped at its own share. Each group's point ceiling is `weight * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct GroupWeights {
    pub interests: f64,
    pub academics: f64,
    pub personality: f64,
    pub values: f64,
    pub experience_bonus: f64,
}

impl Default for GroupWeights {
    fn default() -> Self {
        Self {
            interests: 0.35,
            academics: 0.25,
            personality: 0.20,
            values: 0.20,
            experience_bonus: 0.05,
        }
    }
}

impl GroupWeights {
    /// Sum of the four core groups (documented contract: 1.0).
    #[must_use]
    pub fn core_sum(&self) -> f64 {
        self.interests + self.academics + self.personality + self.values
    }
}

/// Point scale applied to a single matched attribute within a group.
///
/// A matched entry contributes `partial_weight * group_weight * cap` points,
/// so e.g. a perfect interest match is worth `0.35 * 30 = 10.5` points and a
/// handful of matches fills the group's 35-point ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct MatchCaps {
    pub interest_match: f64,
    pub subject_match: f64,
    pub trait_match: f64,
    pub experience_match: f64,
}

impl Default for MatchCaps {
    fn default() -> Self {
        Self {
            interest_match: 30.0,
            subject_match: 40.0,
            trait_match: 25.0,
            experience_match: 100.0,
        }
    }
}

/// Blend of primary and secondary category scores into a career's raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BlendWeights {
    pub primary: f64,
    pub secondary: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            primary: 0.75,
            secondary: 0.25,
        }
    }
}

/// Penalty magnitudes and the cutoffs that trigger them.
///
/// All rules are independent and additive; see the constraint evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct PenaltyConfig {
    /// Points per preparation-ladder step above the student's commitment
    pub preparation_gap: f64,
    /// Points per year of entry time beyond `fast_entry_years`
    pub slow_entry_per_year: f64,
    /// Years of entry time tolerated when fast income is needed
    pub fast_entry_years: f64,
    /// Flat penalty for physically demanding work against a declared limitation
    pub physical_demand: f64,
    /// Demand ordinal at or above which the physical rule fires
    pub demanding_ordinal: u8,
    /// Flat penalty for costly preparation against low support
    pub cost_burden: f64,
    /// Support scalar below which the cost rule can fire
    pub support_cutoff: f64,
    /// Cost level above which the cost rule can fire
    pub cost_cutoff: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            preparation_gap: 15.0,
            slow_entry_per_year: 10.0,
            fast_entry_years: 2.0,
            physical_demand: 20.0,
            demanding_ordinal: 2,
            cost_burden: 15.0,
            support_cutoff: 0.5,
            cost_cutoff: 0.6,
        }
    }
}

/// Absolute and relative cutoffs for tier classification.
///
/// The dual thresholds keep a uniformly weak field from producing an empty
/// top tier and a uniformly strong field from admitting clearly worse
/// options into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TierThresholds {
    pub top_absolute: f64,
    pub top_relative: f64,
    pub mid_absolute: f64,
    pub mid_relative: f64,
    pub stretch_absolute: f64,
    /// Challenge ordinal that admits a career into the stretch tier
    pub stretch_challenge: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            top_absolute: 45.0,
            top_relative: 0.85,
            mid_absolute: 35.0,
            mid_relative: 0.70,
            stretch_absolute: 25.0,
            stretch_challenge: 2,
        }
    }
}

/// Maximum entries per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TierCaps {
    pub top: usize,
    pub mid: usize,
    pub stretch: usize,
}

impl Default for TierCaps {
    fn default() -> Self {
        Self {
            top: 3,
            mid: 3,
            stretch: 2,
        }
    }
}

/// Complete engine parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct EngineParams {
    pub groups: GroupWeights,
    pub caps: MatchCaps,
    pub blend: BlendWeights,
    pub penalties: PenaltyConfig,
    pub thresholds: TierThresholds,
    pub tier_caps: TierCaps,
    /// How many category scores the report carries
    pub category_limit: usize,
    /// Contributions below this many points leave no reasoning string
    pub reasoning_epsilon: f64,
}

impl EngineParams {
    /// Point ceiling of a group given its weight fraction.
    #[must_use]
    pub fn group_ceiling(weight: f64) -> f64 {
        weight * 100.0
    }
}

// `category_limit`/`reasoning_epsilon` need non-zero defaults, so Default is
// implemented by hand rather than derived field-by-field.
impl Default for EngineParams {
    fn default() -> Self {
        Self::reference()
    }
}

impl EngineParams {
    /// Parameter set matching the reference implementation exactly.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            groups: GroupWeights::default(),
            caps: MatchCaps::default(),
            blend: BlendWeights::default(),
            penalties: PenaltyConfig::default(),
            thresholds: TierThresholds::default(),
            tier_caps: TierCaps::default(),
            category_limit: 5,
            reasoning_epsilon: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_group_weights_sum_to_one() {
        let groups = GroupWeights::default();
        assert!((groups.core_sum() - 1.0).abs() < 1e-9);
        assert!(groups.experience_bonus <= 0.05 + 1e-9);
    }

    #[test]
    fn test_blend_weights_sum_to_one() {
        let blend = BlendWeights::default();
        assert!((blend.primary + blend.secondary - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_thresholds_preserved() {
        let t = TierThresholds::default();
        assert_eq!(t.top_absolute, 45.0);
        assert_eq!(t.top_relative, 0.85);
        assert_eq!(t.mid_absolute, 35.0);
        assert_eq!(t.mid_relative, 0.70);
        assert_eq!(t.stretch_absolute, 25.0);
        assert_eq!(t.stretch_challenge, 2);
    }

    #[test]
    fn test_reference_penalties_preserved() {
        let p = PenaltyConfig::default();
        assert_eq!(p.preparation_gap, 15.0);
        assert_eq!(p.slow_entry_per_year, 10.0);
        assert_eq!(p.physical_demand, 20.0);
        assert_eq!(p.cost_burden, 15.0);
    }

    #[test]
    fn test_partial_yaml_override_keeps_defaults() {
        let yaml = "thresholds:\n  top_absolute: 50.0\n";
        let params: EngineParams = serde_yaml_ng::from_str(yaml).expect("parse");
        assert_eq!(params.thresholds.top_absolute, 50.0);
        assert_eq!(params.thresholds.mid_absolute, 35.0);
        assert_eq!(params.penalties.preparation_gap, 15.0);
    }
}
