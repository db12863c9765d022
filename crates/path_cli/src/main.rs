use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use path_cases::{builtin_cases, load_cases, run_cases, CaseOutcome, RunConfig};
use path_core::Problem;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "path_cli", about = "Minimum-hop path from the first node to the last")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one graph given as `N NAME... EDGE...`, e.g. `3 A B C A-B B-C`.
    Solve {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Run the built-in demonstration graphs.
    Demo {
        #[arg(long)]
        json: bool,
    },
    /// Run every case in a JSON case file.
    Run {
        /// Path to the case file.
        #[arg(long)]
        cases: PathBuf,
        /// Print one JSON object per case instead of plain text.
        #[arg(long)]
        json: bool,
        /// Refuse cases with more nodes than this.
        #[arg(long, default_value_t = path_cases::DEFAULT_MAX_NODES)]
        max_nodes: usize,
    },
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Renders one problem the way `solve` prints it: `A-B-C` for a path,
/// otherwise the error message (`No path found from A to C`).
fn render_solution(tokens: &[String]) -> Result<String> {
    let problem = Problem::from_tokens(tokens).context("parsing problem tokens")?;
    // Unreachable and duplicate names are reported, not failures of the tool.
    Ok(match problem.solve() {
        Ok(path) => path.to_string(),
        Err(err) => err.to_string(),
    })
}

fn outcome_json(outcome: &CaseOutcome) -> serde_json::Value {
    match &outcome.result {
        Ok(path) => serde_json::json!({
            "case": outcome.name,
            "path": path.path,
            "distance": path.distance,
            "matches": outcome.matches(),
        }),
        Err(err) => serde_json::json!({
            "case": outcome.name,
            "error": err.to_string(),
            "matches": outcome.matches(),
        }),
    }
}

fn format_outcome(outcome: &CaseOutcome) -> String {
    let rendered = match &outcome.result {
        Ok(path) => path.to_string(),
        Err(err) => err.to_string(),
    };
    let mark = if outcome.matches() { "" } else { "  [MISMATCH]" };
    format!("{:<16} {rendered}{mark}", outcome.name)
}

/// Prints every outcome and returns how many missed their expectation.
fn report(outcomes: &[CaseOutcome], json: bool) -> usize {
    for outcome in outcomes {
        if json {
            println!("{}", outcome_json(outcome));
        } else {
            println!("{}", format_outcome(outcome));
        }
    }
    outcomes.iter().filter(|o| !o.matches()).count()
}

fn run(cases_path: &Path, json: bool, config: RunConfig) -> Result<usize> {
    tracing::debug!(path = %cases_path.display(), ?config, "running case file");
    let file = load_cases(cases_path, &config)?;
    let outcomes = run_cases(&file.cases, &config)?;
    Ok(report(&outcomes, json))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mismatches = match cli.command {
        Commands::Solve { tokens } => {
            println!("{}", render_solution(&tokens)?);
            0
        }
        Commands::Demo { json } => {
            report(&run_cases(&builtin_cases(), &RunConfig::default())?, json)
        }
        Commands::Run {
            cases,
            json,
            max_nodes,
        } => run(&cases, json, RunConfig { max_nodes })?,
    };

    if mismatches > 0 {
        eprintln!("{mismatches} case(s) did not match their expected result");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
