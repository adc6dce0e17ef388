//! Parallel scoring of many profiles against one engine.
//!
//! Matching is pure and the engine is shared immutably, so profiles are
//! embarrassingly parallel; rayon splits the file list across the thread
//! pool with no coordination.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::info;

use crate::engine::MatchEngine;
use crate::error::CompassError;
use crate::model::MatchReport;

use super::parse::load_profile;

/// Outcome of scoring one profile file.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The profile file this outcome belongs to
    pub path: PathBuf,
    /// The report, or the load error for this file
    pub result: Result<MatchReport, CompassError>,
}

/// Aggregate counts over a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Score every profile file, in parallel; results keep input order.
///
/// A file that fails to load reports its own error and never aborts the
/// rest of the batch.
#[must_use]
pub fn run_batch(engine: &MatchEngine, paths: &[PathBuf]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = paths
        .par_iter()
        .map(|path| BatchOutcome {
            path: path.clone(),
            result: load_profile(path).map(|profile| engine.recommend(&profile)),
        })
        .collect();
    let summary = summarize(&outcomes);
    info!(
        total = paths.len(),
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch scoring finished"
    );
    outcomes
}

/// Count successes and failures.
#[must_use]
pub fn summarize(outcomes: &[BatchOutcome]) -> BatchSummary {
    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    BatchSummary {
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}
