#![warn(missing_docs)]
//! SolverBench Report - Records and Output
//!
//! Turns `DatasetSummary` values into stable report records and encodes them:
//! - CSV (the canonical artifact, one row per dataset)
//! - JSON (machine-readable, with raw metrics and run metadata)
//!
//! The human-readable table lives in the CLI crate next to the progress output.

mod csv;
mod format;
mod json;
mod report;

pub use csv::{CSV_HEADER, generate_csv_report};
pub use format::{format_effort_mean_std, format_rate, format_time_compact, format_time_mean_std, round2};
pub use json::generate_json_report;
pub use report::{
    DatasetMetrics, DatasetReport, DatasetRow, Report, ReportConfig, ReportMeta, ReportSummary,
    SystemInfo, assemble_row, dataset_display_name,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated rows with a fixed header
    #[default]
    Csv,
    /// JSON with metadata and raw metrics
    Json,
    /// Aligned terminal table
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        };
        f.write_str(name)
    }
}
