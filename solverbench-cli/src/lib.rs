#![warn(missing_docs)]
//! SolverBench CLI Library
//!
//! Command line surface, configuration layering and the orchestration of a
//! benchmark run: discover datasets, replay every case through the target
//! program one at a time, and persist one report artifact at the end.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     solverbench_cli::run()
//! }
//! ```

mod config;
mod error;
mod executor;
mod planner;
mod supervisor;

pub use config::*;
pub use error::HarnessError;
pub use executor::{
    DatasetExecutor, RunTotals, build_report, format_human_output, summarize_outcomes,
};
pub use planner::{ExecutionPlan, build_plan, discover_datasets};
pub use supervisor::CaseRunner;

use clap::Parser;
use regex::Regex;
use solverbench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SolverBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "solverbench")]
#[command(
    author,
    version,
    about = "SolverBench - replay labeled datasets against a solver and report accuracy and speed"
)]
pub struct Cli {
    /// Directory whose files are the datasets
    #[arg(long)]
    pub dir: PathBuf,

    /// Output file for the report
    #[arg(long)]
    pub out: PathBuf,

    /// Per-case timeout in seconds (default: 10.0, or solverbench.toml)
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Output format: csv, json, human (default: csv, or solverbench.toml)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Only run datasets whose file name matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Target program and its arguments, after `--`
    #[arg(last = true)]
    pub command: Vec<String>,
}

/// Run the SolverBench CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SolverBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // solverbench.toml sits between built-in defaults and CLI flags
    let file_config = SolverBenchConfig::discover().unwrap_or_default();
    let config = build_benchmark_config(&cli, &file_config)?;

    let report = run_benchmarks(&config)?;
    write_report(&report, config.format, &config.output_path)?;

    println!("Results saved to: {}", config.output_path.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "solverbench=debug"
    } else {
        "solverbench=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the run configuration: solverbench.toml values, then CLI overrides.
///
/// The target command is checked first so a missing command fails before any
/// other validation.
pub fn build_benchmark_config(
    cli: &Cli,
    file_config: &SolverBenchConfig,
) -> Result<BenchmarkConfig, HarnessError> {
    if cli.command.is_empty() {
        return Err(HarnessError::MissingCommand);
    }

    let per_case_timeout = match cli.timeout {
        Some(secs) => timeout_from_secs(secs)?,
        None => file_config.timeout(),
    };

    let filter = cli
        .filter
        .as_deref()
        .or(file_config.runner.filter.as_deref())
        .map(Regex::new)
        .transpose()?;

    Ok(BenchmarkConfig {
        dataset_directory: cli.dir.clone(),
        output_path: cli.out.clone(),
        per_case_timeout,
        target_command: cli.command.clone(),
        format: cli.format.unwrap_or_else(|| file_config.format()),
        filter,
        show_progress: !cli.no_progress && file_config.output.progress,
    })
}

/// Run every selected dataset and build the report.
///
/// Datasets run in file-name order on a single-threaded runtime; the
/// report holds one entry per dataset that produced at least one outcome.
pub fn run_benchmarks(config: &BenchmarkConfig) -> Result<Report, HarnessError> {
    config.validate()?;
    let start = Instant::now();

    let plan = discover_datasets(&config.dataset_directory, config.filter.as_ref())?;
    info!(
        datasets = plan.datasets.len(),
        filtered_out = plan.filtered_out,
        command = ?config.target_command,
        timeout = ?config.per_case_timeout,
        "starting benchmark run"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(HarnessError::Runtime)?;

    let runner = CaseRunner::new(config.target_command.clone(), config.per_case_timeout);
    let mut executor = DatasetExecutor::new(runner, config.show_progress);
    let summaries = runtime.block_on(executor.execute(&plan.datasets));

    let total_duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    let totals = executor.totals();
    info!(
        reported = totals.datasets_reported,
        found = totals.datasets_found,
        excluded_cases = totals.failures.total(),
        "benchmark run complete"
    );

    Ok(build_report(&summaries, totals, config, total_duration_ms))
}

/// Render the report in `format` and write it to `path` in one go
pub fn write_report(report: &Report, format: OutputFormat, path: &Path) -> Result<(), HarnessError> {
    let content = match format {
        OutputFormat::Csv => generate_csv_report(&report.rows()),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Human => format_human_output(report),
    };

    std::fs::write(path, content).map_err(|source| HarnessError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
