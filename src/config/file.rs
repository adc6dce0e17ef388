//! Configuration file loading and discovery.
//!
//! A config file may replace the catalog, the criteria tables, the engine
//! parameters, or any subset; whatever it omits falls back to the built-in
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogErrorKind, CompassError, Result};
use crate::model::{Career, CareerCatalog, Category};
use crate::scoring::{CriteriaEntry, CriteriaTable};

use super::defaults;
use super::types::EngineParams;

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".career-compass.yaml",
    ".career-compass.yml",
    "career-compass.yaml",
    "career-compass.yml",
];

/// On-disk configuration: every section optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct CompassConfigFile {
    /// Replacement category catalog
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Replacement career catalog
    #[serde(default)]
    pub careers: Option<Vec<Career>>,
    /// Replacement criteria mapping tuples
    #[serde(default)]
    pub criteria: Option<Vec<CriteriaEntry>>,
    /// Engine parameter overrides
    #[serde(default)]
    pub params: Option<EngineParams>,
}

impl CompassConfigFile {
    /// Resolve the file into typed engine inputs, filling omitted sections
    /// from the built-in defaults.
    #[must_use]
    pub fn into_parts(self) -> (CareerCatalog, CriteriaTable, EngineParams) {
        let categories = self
            .categories
            .unwrap_or_else(defaults::default_categories);
        let careers = self.careers.unwrap_or_else(defaults::default_careers);
        let criteria = self
            .criteria
            .unwrap_or_else(defaults::default_criteria_entries);
        let params = self.params.unwrap_or_else(EngineParams::reference);
        (
            CareerCatalog::new(categories, careers),
            CriteriaTable::from_entries(criteria),
            params,
        )
    }
}

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/career-compass/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let app_config_dir = config_dir.join("career-compass");
        if let Some(path) = find_config_in_dir(&app_config_dir) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Load a [`CompassConfigFile`] from a YAML or JSON file.
pub fn load_config_file(path: &Path) -> Result<CompassConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| CompassError::io(path, e))?;
    let context = format!("at {}", path.display());

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml_ng::from_str(&content)
            .map_err(|e| CompassError::catalog(context, CatalogErrorKind::InvalidYaml(e.to_string()))),
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| CompassError::catalog(context, CatalogErrorKind::InvalidJson(e.to_string()))),
        _ => Err(CompassError::catalog(
            context,
            CatalogErrorKind::UnknownFormat,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let file = CompassConfigFile::default();
        let (catalog, criteria, params) = file.into_parts();
        assert_eq!(catalog.career_count(), defaults::default_careers().len());
        assert!(!criteria.is_empty());
        assert_eq!(params, EngineParams::reference());
    }

    #[test]
    fn test_partial_config_replaces_only_named_sections() {
        let yaml = r"
params:
  tier_caps:
    top: 5
";
        let file: CompassConfigFile = serde_yaml_ng::from_str(yaml).expect("parse");
        let (catalog, _, params) = file.into_parts();
        assert_eq!(params.tier_caps.top, 5);
        assert_eq!(params.tier_caps.mid, 3);
        assert_eq!(catalog.career_count(), defaults::default_careers().len());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let yaml = "surprise: true\n";
        assert!(serde_yaml_ng::from_str::<CompassConfigFile>(yaml).is_err());
    }

    #[test]
    fn test_load_config_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("career-compass.yaml");
        std::fs::write(
            &path,
            "categories:\n  - id: only\n    name: Only\n    values:\n      income: 0.5\n      stability: 0.5\n      helping: 0.5\n      risk: 0.5\n",
        )
        .expect("write");

        let file = load_config_file(&path).expect("load");
        let (catalog, _, _) = file.into_parts();
        assert_eq!(catalog.category_count(), 1);
        assert_eq!(catalog.categories()[0].id, "only");
    }

    #[test]
    fn test_load_config_rejects_unknown_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "x = 1").expect("write");
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "{}").expect("write");
        assert_eq!(discover_config_file(Some(&path)), Some(path));
    }
}
