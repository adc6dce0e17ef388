//! Startup-time validation of catalogs, criteria tables, and parameters.
//!
//! A malformed static configuration is a deployment bug, not a runtime
//! failure path; everything here runs once at engine construction.

use crate::model::CareerCatalog;
use crate::scoring::CriteriaTable;

use super::types::EngineParams;

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field or entry that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for EngineParams {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let core = self.groups.core_sum();
        if (core - 1.0).abs() > 0.01 {
            errors.push(ConfigError {
                field: "groups".to_string(),
                message: format!("core group weights must sum to 1.0, got {core:.3}"),
            });
        }
        for (field, weight) in [
            ("groups.interests", self.groups.interests),
            ("groups.academics", self.groups.academics),
            ("groups.personality", self.groups.personality),
            ("groups.values", self.groups.values),
            ("groups.experience_bonus", self.groups.experience_bonus),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: format!("weight must be in [0, 1], got {weight}"),
                });
            }
        }

        let blend = self.blend.primary + self.blend.secondary;
        if (blend - 1.0).abs() > 0.01 {
            errors.push(ConfigError {
                field: "blend".to_string(),
                message: format!("primary + secondary must equal 1.0, got {blend:.3}"),
            });
        }

        for (field, value) in [
            ("thresholds.top_relative", self.thresholds.top_relative),
            ("thresholds.mid_relative", self.thresholds.mid_relative),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: format!("relative threshold must be in [0, 1], got {value}"),
                });
            }
        }
        for (field, value) in [
            ("thresholds.top_absolute", self.thresholds.top_absolute),
            ("thresholds.mid_absolute", self.thresholds.mid_absolute),
            ("thresholds.stretch_absolute", self.thresholds.stretch_absolute),
        ] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: format!("absolute threshold must be in [0, 100], got {value}"),
                });
            }
        }

        for (field, value) in [
            ("penalties.preparation_gap", self.penalties.preparation_gap),
            ("penalties.slow_entry_per_year", self.penalties.slow_entry_per_year),
            ("penalties.physical_demand", self.penalties.physical_demand),
            ("penalties.cost_burden", self.penalties.cost_burden),
        ] {
            if value < 0.0 {
                errors.push(ConfigError {
                    field: field.to_string(),
                    message: format!("penalty must be non-negative, got {value}"),
                });
            }
        }

        if self.category_limit == 0 {
            errors.push(ConfigError {
                field: "category_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for CareerCatalog {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut seen_categories = std::collections::HashSet::new();
        let mut seen_careers = std::collections::HashSet::new();

        for category in self.categories() {
            if !seen_categories.insert(category.id.as_str()) {
                errors.push(ConfigError {
                    field: format!("categories.{}", category.id),
                    message: "duplicate category id".to_string(),
                });
            }
            if !category.values.in_unit_range() {
                errors.push(ConfigError {
                    field: format!("categories.{}.values", category.id),
                    message: "value-profile affinities must be in [0, 1]".to_string(),
                });
            }
        }

        for career in self.careers() {
            if !seen_careers.insert(career.id.as_str()) {
                errors.push(ConfigError {
                    field: format!("careers.{}", career.id),
                    message: "duplicate career id".to_string(),
                });
            }
            if self.category(&career.category).is_none() {
                errors.push(ConfigError {
                    field: format!("careers.{}.category", career.id),
                    message: format!("unknown category '{}'", career.category),
                });
            }
            if let Some(secondary) = &career.secondary_category {
                if self.category(secondary).is_none() {
                    errors.push(ConfigError {
                        field: format!("careers.{}.secondary_category", career.id),
                        message: format!("unknown category '{secondary}'"),
                    });
                }
            }
            if !(0.0..=1.0).contains(&career.cost_level) {
                errors.push(ConfigError {
                    field: format!("careers.{}.cost_level", career.id),
                    message: format!("cost level must be in [0, 1], got {}", career.cost_level),
                });
            }
            if career.years_to_entry < 0.0 {
                errors.push(ConfigError {
                    field: format!("careers.{}.years_to_entry", career.id),
                    message: "years to entry must be non-negative".to_string(),
                });
            }
        }

        errors
    }
}

/// Validate an entire engine setup, including the cross-references the
/// per-type impls cannot see (criteria entries pointing at catalog
/// categories).
#[must_use]
pub fn validate_setup(
    catalog: &CareerCatalog,
    criteria: &CriteriaTable,
    params: &EngineParams,
) -> Vec<ConfigError> {
    let mut errors = catalog.validate();
    errors.extend(params.validate());

    for entry in criteria.entries() {
        if catalog.category(&entry.category).is_none() {
            errors.push(ConfigError {
                field: format!("criteria.{}.{}", entry.value, entry.category),
                message: format!("unknown category '{}'", entry.category),
            });
        }
        if !(entry.weight > 0.0 && entry.weight <= 1.0) {
            errors.push(ConfigError {
                field: format!("criteria.{}", entry.value),
                message: format!("weight must be in (0, 1], got {}", entry.weight),
            });
        }
    }

    errors
}
