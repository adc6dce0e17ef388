//! Report rendering for match results.
//!
//! The engine's [`MatchReport`] is the single source of truth; renderers
//! only change its presentation, never its content or ordering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, ReportErrorKind, Result};
use crate::model::{MatchReport, RankedCareer};

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON (the exact output record)
    Json,
    /// Markdown suitable for sharing
    Markdown,
}

impl ReportFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    /// Infer a format from an output path extension; `None` means text.
    #[must_use]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("md" | "markdown") => Some(Self::Markdown),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Render a report in the requested format.
pub fn render(report: &MatchReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => serde_json::to_string_pretty(report).map_err(|e| {
            CompassError::report(
                "serializing match report",
                ReportErrorKind::JsonSerializationError(e.to_string()),
            )
        }),
        ReportFormat::Markdown => Ok(render_markdown(report)),
    }
}

fn push_text_entries(out: &mut String, entries: &[RankedCareer]) {
    if entries.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({}/100)", i + 1, entry.title, entry.score);
        for reason in &entry.reasoning {
            let _ = writeln!(out, "     - {reason}");
        }
        for note in &entry.feasibility_notes {
            let _ = writeln!(out, "     ! {note}");
        }
    }
}

fn render_text(report: &MatchReport) -> String {
    let mut out = String::new();
    out.push_str("Career recommendations\n");
    out.push_str("======================\n\n");

    for (tier, entries) in report.tiers() {
        let _ = writeln!(out, "{}", heading_case(tier.name()));
        push_text_entries(&mut out, entries);
        out.push('\n');
    }

    out.push_str("Where your profile points\n");
    for insight in &report.categories {
        let _ = writeln!(out, "  {} ({}/100)", insight.name, insight.score);
        for reason in &insight.reasoning {
            let _ = writeln!(out, "     - {reason}");
        }
    }

    let _ = write!(out, "\nNote: {}\n", report.disclaimer);
    out
}

fn render_markdown(report: &MatchReport) -> String {
    let mut out = String::new();
    out.push_str("# Career recommendations\n");

    for (tier, entries) in report.tiers() {
        let _ = write!(out, "\n## {}\n\n", heading_case(tier.name()));
        if entries.is_empty() {
            out.push_str("_none_\n");
            continue;
        }
        for entry in entries {
            let _ = writeln!(out, "### {} — {}/100", entry.title, entry.score);
            for reason in &entry.reasoning {
                let _ = writeln!(out, "- {reason}");
            }
            for note in &entry.feasibility_notes {
                let _ = writeln!(out, "- **Heads up:** {note}");
            }
        }
    }

    out.push_str("\n## Where your profile points\n\n");
    for insight in &report.categories {
        let _ = writeln!(out, "- **{}**: {}/100", insight.name, insight.score);
    }

    let _ = write!(out, "\n> {}\n", report.disclaimer);
    out
}

/// Capitalize the first letter of a tier name for headings.
fn heading_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
