//! Command handlers behind the thin clap parser in `main.rs`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{self, EngineParams};
use crate::engine::MatchEngine;
use crate::model::CareerCatalog;
use crate::pipeline::{self, exit_codes, OutputTarget};
use crate::reports::{render, ReportFormat};
use crate::scoring::CriteriaTable;

/// Build an engine from an explicit config path, a discovered config file,
/// or the built-in defaults.
pub fn load_engine(config_path: Option<&Path>) -> Result<MatchEngine> {
    let (catalog, criteria, params) = match config::discover_config_file(config_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            let file = config::load_config_file(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            file.into_parts()
        }
        None => {
            if let Some(path) = config_path {
                anyhow::bail!("config file not found: {}", path.display());
            }
            debug!("no config file found, using built-in defaults");
            default_parts()
        }
    };
    MatchEngine::new(catalog, criteria, params).context("validating engine configuration")
}

fn default_parts() -> (CareerCatalog, CriteriaTable, EngineParams) {
    (
        CareerCatalog::new(
            config::defaults::default_categories(),
            config::defaults::default_careers(),
        ),
        CriteriaTable::from_entries(config::defaults::default_criteria_entries()),
        EngineParams::reference(),
    )
}

/// `match`: score one profile and render the report.
pub fn run_match(
    profile_path: &Path,
    config_path: Option<&Path>,
    format: Option<ReportFormat>,
    output: Option<PathBuf>,
) -> Result<i32> {
    let engine = load_engine(config_path)?;
    let profile = match pipeline::load_profile(profile_path) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("{err}");
            return Ok(exit_codes::INVALID_INPUT);
        }
    };

    let report = engine.recommend(&profile);
    let format = format
        .or_else(|| output.as_deref().and_then(ReportFormat::from_path))
        .unwrap_or_default();
    let rendered = render(&report, format)?;
    pipeline::write_output(&OutputTarget::from_path(output), &rendered)?;

    if report.is_empty() {
        Ok(exit_codes::NO_RECOMMENDATIONS)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// `batch`: score many profiles in parallel.
///
/// With `--out-dir`, each report is written next to its profile's stem;
/// otherwise everything streams to stdout with per-file headers.
pub fn run_batch(
    profile_paths: &[PathBuf],
    config_path: Option<&Path>,
    format: Option<ReportFormat>,
    out_dir: Option<&Path>,
) -> Result<i32> {
    if profile_paths.is_empty() {
        anyhow::bail!("no profile files given");
    }
    let engine = load_engine(config_path)?;
    let format = format.unwrap_or_default();
    let outcomes = pipeline::run_batch(&engine, profile_paths);

    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => {
                let rendered = render(report, format)?;
                match out_dir {
                    Some(dir) => {
                        let stem = outcome
                            .path
                            .file_stem()
                            .map_or_else(|| "report".to_string(), |s| s.to_string_lossy().into_owned());
                        let target = OutputTarget::File(
                            dir.join(format!("{stem}.{}", extension_for(format))),
                        );
                        pipeline::write_output(&target, &rendered)?;
                    }
                    None => {
                        println!("== {} ==", outcome.path.display());
                        print!("{rendered}");
                    }
                }
            }
            Err(err) => eprintln!("{}: {err}", outcome.path.display()),
        }
    }

    let summary = pipeline::summarize(&outcomes);
    eprintln!(
        "batch: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );
    if summary.failed > 0 {
        Ok(exit_codes::INVALID_INPUT)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

const fn extension_for(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Text => "txt",
        ReportFormat::Json => "json",
        ReportFormat::Markdown => "md",
    }
}

/// `validate`: check a configuration without scoring anything.
pub fn run_validate(config_path: Option<&Path>) -> Result<i32> {
    let (catalog, criteria, params) = match config::discover_config_file(config_path) {
        Some(path) => {
            let file = config::load_config_file(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            println!("Validating {}", path.display());
            file.into_parts()
        }
        None => {
            if let Some(path) = config_path {
                anyhow::bail!("config file not found: {}", path.display());
            }
            println!("Validating built-in defaults");
            default_parts()
        }
    };

    let errors = config::validate_setup(&catalog, &criteria, &params);
    if errors.is_empty() {
        println!(
            "OK: {} categories, {} careers, {} criteria entries",
            catalog.category_count(),
            catalog.career_count(),
            criteria.entries().len()
        );
        Ok(exit_codes::SUCCESS)
    } else {
        for error in &errors {
            eprintln!("error: {error}");
        }
        Ok(exit_codes::INVALID_INPUT)
    }
}

/// `catalog`: list the categories and careers the engine would use.
pub fn run_catalog(config_path: Option<&Path>) -> Result<i32> {
    let engine = load_engine(config_path)?;
    let catalog = engine.catalog();

    println!("Categories ({}):", catalog.category_count());
    for category in catalog.categories() {
        println!("  {:<16} {}", category.id, category.name);
    }
    println!("\nCareers ({}):", catalog.career_count());
    for career in catalog.careers() {
        let secondary = career
            .secondary_category
            .as_deref()
            .map_or(String::new(), |s| format!(" (+{s})"));
        println!(
            "  {:<24} {} [{}{}]",
            career.id, career.title, career.category, secondary
        );
    }
    Ok(exit_codes::SUCCESS)
}

/// `schema`: print the JSON Schema for an input file format.
#[cfg(feature = "schema")]
pub fn run_schema(target: SchemaTarget) -> Result<i32> {
    let schema = match target {
        SchemaTarget::Profile => schemars::schema_for!(crate::model::Profile),
        SchemaTarget::Config => schemars::schema_for!(crate::config::CompassConfigFile),
        SchemaTarget::Report => schemars::schema_for!(crate::model::MatchReport),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(exit_codes::SUCCESS)
}

/// Which input format `schema` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaTarget {
    /// The student profile file
    Profile,
    /// The catalog/criteria/parameter config file
    Config,
    /// The match report output record
    Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_engine_defaults_when_no_config() {
        // Discovery may find nothing in a scratch dir; defaults must work.
        let engine = load_engine(None);
        assert!(engine.is_ok());
    }

    #[test]
    fn test_load_engine_rejects_missing_explicit_path() {
        let result = load_engine(Some(Path::new("/no/such/config.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_extension_for_formats() {
        assert_eq!(extension_for(ReportFormat::Json), "json");
        assert_eq!(extension_for(ReportFormat::Markdown), "md");
        assert_eq!(extension_for(ReportFormat::Text), "txt");
    }
}
