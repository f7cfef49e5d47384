//! Dataset Executor
//!
//! Runs datasets and turns their outcomes into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan (sorted dataset files)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Replay each case through the CaseRunner, one at a time
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Outcomes → DatasetSummary (or nothing)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Rows + metrics + metadata → Report
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sequential dataset and case execution
//! - [`statistics`] - Per-dataset summary computation
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

pub use execution::{DatasetExecutor, RunTotals};
pub use formatting::format_human_output;
pub use report::build_report;
pub use statistics::summarize_outcomes;
