//! Pipeline orchestration for CLI runs.
//!
//! Shared load → match → render → write plumbing for the command handlers,
//! plus the exit codes CI consumers key off.

mod batch;
mod output;
mod parse;

pub use batch::{run_batch, summarize, BatchOutcome, BatchSummary};
pub use output::{write_output, OutputTarget};
pub use parse::{load_profile, parse_profile_str};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - at least one recommendation produced
    pub const SUCCESS: i32 = 0;
    /// The run completed but every tier came back empty
    pub const NO_RECOMMENDATIONS: i32 = 1;
    /// A profile or configuration file was invalid
    pub const INVALID_INPUT: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
