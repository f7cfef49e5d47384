#![warn(missing_docs)]
//! # SolverBench
//!
//! Benchmark harness that replays labeled positions against an external
//! solver process and reports accuracy and speed per dataset.
//!
//! - **One process per case**: every test case runs in a fresh target process,
//!   strictly one at a time
//! - **Hard timeouts**: a case that outlives its deadline is killed, reaped and
//!   excluded; the run carries on with the next case
//! - **Plain protocol**: the target reads `"{input}\n"` on stdin and answers
//!   `label effort time_us` on stdout
//! - **Reports**: CSV (default), JSON with raw metrics and run metadata, or a
//!   human-readable table
//!
//! ## Quick Start
//!
//! ```text
//! solverbench --dir datasets/ --out results.csv --timeout 5 -- ./my-solver --depth 12
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use solverbench::{BenchmarkConfig, run_benchmarks, write_report};
//!
//! let config = BenchmarkConfig::new("datasets", "results.csv", vec!["./my-solver".into()]);
//! let report = run_benchmarks(&config)?;
//! write_report(&report, config.format, &config.output_path)?;
//! ```

// Re-export core types
pub use solverbench_core::{
    CaseFailure, CaseOutcome, DatasetSummary, FailureTally, ResponseError, SolverResponse,
    TestCase, format_request, parse_dataset, parse_line, parse_response,
};

// Re-export statistics
pub use solverbench_stats::{SummaryStatistics, compute_summary};

// Re-export report types
pub use solverbench_report::{
    DatasetRow, OutputFormat, Report, assemble_row, format_time_compact, generate_csv_report,
    generate_json_report,
};

// Re-export the harness
pub use solverbench_cli::{
    BenchmarkConfig, CaseRunner, Cli, DatasetExecutor, HarnessError, SolverBenchConfig,
    build_benchmark_config, run, run_benchmarks, run_with_cli, write_report,
};
