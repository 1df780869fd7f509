use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use prime_pyramid::source::{Interactive, PyramidFile};
use prime_pyramid::{ApexPolicy, Outcome, PyramidError, ReportPolicy, Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prime-pyramid")]
#[command(about = "Maximum pyramid path sum avoiding prime cells", long_about = None)]
struct Cli {
    /// Pyramid file, one row per line; omit to enter values interactively
    file: Option<PathBuf>,

    /// JSON solver configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which vertex to report when the sink is unreachable
    #[arg(long, value_enum)]
    report: Option<ReportPolicy>,

    /// What to do with the remaining input when the apex is prime
    #[arg(long, value_enum)]
    apex: Option<ApexPolicy>,

    /// Print the outcome as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also print the values along the chosen path
    #[arg(long, default_value_t = false)]
    show_path: bool,
}

/// Unopenable input file.
const EXIT_OPEN: u8 = 1;
/// Malformed input or configuration.
const EXIT_INPUT: u8 = 2;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            let open_failure = err
                .downcast_ref::<PyramidError>()
                .is_some_and(PyramidError::is_open_failure);
            ExitCode::from(if open_failure { EXIT_OPEN } else { EXIT_INPUT })
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(report) = cli.report {
        config.report = report;
    }
    if let Some(apex) = cli.apex {
        config.apex = apex;
    }
    tracing::debug!(?config, "solver configuration");

    let solver = Solver::new(config);
    let outcome = match &cli.file {
        Some(path) => {
            println!("Trying to open {}...", path.display());
            let mut file = PyramidFile::open(path)?;
            let rows = file.rows();
            let outcome = solver.solve(rows, &mut file)?;
            tracing::debug!(rows, consumed = file.consumed(), "file input processed");
            outcome
        }
        None => {
            println!("No filename supplied.");
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut term = Interactive::new(stdin.lock(), stdout.lock());
            let rows = term.read_row_count()?;
            solver.solve(rows, &mut term)?
        }
    };

    report(cli, &outcome)
}

fn report(cli: &Cli, outcome: &Outcome) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string(outcome)?);
        return Ok(());
    }

    println!("{}", outcome);
    if cli.show_path && outcome.exists() {
        println!("Path: {}", outcome.path_display());
    }
    Ok(())
}
