//! Harness Errors
//!
//! Only configuration and run-level I/O problems end up here. Anything that
//! goes wrong with a single test case is a `CaseFailure` and stays inside the
//! dataset executor.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal, run-level errors
#[derive(Debug, Error)]
pub enum HarnessError {
    /// No target command after `--`
    #[error("Provide the target command after '--'")]
    MissingCommand,

    /// Timeout is not a positive, finite number of seconds
    #[error("Timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(f64),

    /// Filter is not a valid regex
    #[error("Invalid dataset filter")]
    InvalidFilter(#[from] regex::Error),

    /// Dataset directory cannot be read
    #[error("Cannot list dataset directory {}", .path.display())]
    DatasetDirectory {
        /// Directory given with `--dir`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Report artifact cannot be written
    #[error("Cannot write output {}", .path.display())]
    WriteOutput {
        /// Output path given with `--out`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding failed
    #[error("Failed to encode report")]
    Encode(#[from] serde_json::Error),

    /// Async runtime could not be built
    #[error("Failed to start runtime")]
    Runtime(#[source] std::io::Error),
}
