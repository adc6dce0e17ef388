//! Profile loading at the CLI boundary.

use std::path::Path;

use crate::error::{CompassError, ProfileErrorKind, Result};
use crate::model::Profile;

/// Load a profile from a JSON or YAML file, dispatching on extension.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path).map_err(|e| CompassError::io(path, e))?;
    let context = format!("at {}", path.display());

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            CompassError::profile(context, ProfileErrorKind::InvalidJson(e.to_string()))
        }),
        Some("yaml" | "yml") => serde_yaml_ng::from_str(&content).map_err(|e| {
            CompassError::profile(context, ProfileErrorKind::InvalidYaml(e.to_string()))
        }),
        _ => parse_profile_str(&content).map_err(|e| match e {
            CompassError::Profile { source, .. } => CompassError::profile(context, source),
            other => other,
        }),
    }
}

/// Parse a profile from a string, sniffing JSON vs YAML.
///
/// JSON documents start with `{`; anything else is treated as YAML.
pub fn parse_profile_str(content: &str) -> Result<Profile> {
    if content.trim_start().starts_with('{') {
        serde_json::from_str(content).map_err(|e| {
            CompassError::profile(
                "parsing profile",
                ProfileErrorKind::InvalidJson(e.to_string()),
            )
        })
    } else {
        serde_yaml_ng::from_str(content).map_err(|e| {
            CompassError::profile(
                "parsing profile",
                ProfileErrorKind::InvalidYaml(e.to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EducationCommitment;

    #[test]
    fn test_parse_json_profile() {
        let profile = parse_profile_str(
            r#"{"grade_level": 11, "education_commitment": "certificate", "work_styles": ["hands-on"]}"#,
        )
        .expect("parse");
        assert_eq!(profile.education_commitment, EducationCommitment::Certificate);
        assert_eq!(profile.work_styles.len(), 1);
    }

    #[test]
    fn test_parse_yaml_profile() {
        let profile = parse_profile_str(
            "grade_level: 10\neducation_commitment: bachelor\nfavorite_subjects:\n  - biology\n",
        )
        .expect("parse");
        assert_eq!(profile.grade_level, 10);
        assert_eq!(profile.favorite_subjects.len(), 1);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        assert!(parse_profile_str(r#"{"grade_level": 11}"#).is_err());
    }

    #[test]
    fn test_load_profile_dispatches_on_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, "grade_level: 9\neducation_commitment: high-school\n")
            .expect("write");
        let profile = load_profile(&path).expect("load");
        assert_eq!(profile.grade_level, 9);
    }

    #[test]
    fn test_load_profile_missing_file() {
        let err = load_profile(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CompassError::Io { .. }));
    }
}
