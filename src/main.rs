//! career-compass: deterministic career matching and recommendation tool.

use anyhow::Result;
use career_compass::cli;
use career_compass::pipeline::exit_codes;
use career_compass::reports::ReportFormat;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(version)]
#[command(about = "Deterministic career matching and recommendation engine", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Recommendations produced
    1  Run completed but every tier came back empty
    2  Invalid profile or configuration
    3  Error occurred

EXAMPLES:
    # Match one profile against the built-in catalog
    career-compass match profile.json

    # Machine-readable output for the narration layer
    career-compass match profile.json -f json > report.json

    # Score a whole folder of profiles in parallel
    career-compass batch profiles/*.yaml --out-dir reports -f markdown

    # Check a custom catalog before deploying it
    career-compass validate --config school-catalog.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file (catalog, criteria, parameters)
    #[arg(long, global = true, env = "CAREER_COMPASS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one profile and print a tiered recommendation report
    #[command(name = "match")]
    Match {
        /// Profile file (JSON or YAML)
        profile: PathBuf,

        /// Output format (inferred from --output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score many profiles in parallel
    Batch {
        /// Profile files (JSON or YAML)
        #[arg(required = true)]
        profiles: Vec<PathBuf>,

        /// Output format for every report
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,

        /// Write one report per profile into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate a configuration without scoring anything
    Validate,

    /// List the categories and careers the engine would use
    Catalog,

    /// Print the JSON Schema for an input or output file format
    #[cfg(feature = "schema")]
    Schema {
        /// Which format to describe
        #[arg(value_enum)]
        target: cli::SchemaTarget,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: Cli) -> Result<i32> {
    match args.command {
        Commands::Match {
            profile,
            format,
            output,
        } => cli::run_match(&profile, args.config.as_deref(), format, output),
        Commands::Batch {
            profiles,
            format,
            out_dir,
        } => cli::run_batch(&profiles, args.config.as_deref(), format, out_dir.as_deref()),
        Commands::Validate => cli::run_validate(args.config.as_deref()),
        Commands::Catalog => cli::run_catalog(args.config.as_deref()),
        #[cfg(feature = "schema")]
        Commands::Schema { target } => cli::run_schema(target),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
