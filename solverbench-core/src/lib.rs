#![warn(missing_docs)]
//! SolverBench Core - Data Model
//!
//! This crate holds everything the harness knows about a single benchmark run
//! that does not involve spawning processes:
//! - `TestCase` / `CaseOutcome` / `CaseFailure` for one replayed position
//! - Dataset source parsing (one labeled case per line)
//! - The line-oriented request/response protocol spoken with the target solver
//! - `DatasetSummary`, the per-dataset aggregate handed to the report layer

mod case;
mod dataset;
mod protocol;
mod summary;

pub use case::{CaseFailure, CaseOutcome, TestCase};
pub use dataset::{parse_dataset, parse_line};
pub use protocol::{ResponseError, SolverResponse, format_request, parse_response};
pub use summary::{DatasetSummary, FailureTally};

/// Minimum number of whitespace-separated tokens on a dataset line
pub const MIN_DATASET_TOKENS: usize = 2;

/// Minimum number of whitespace-separated tokens in a solver response
pub const MIN_RESPONSE_TOKENS: usize = 3;
