//! Test Case Types

use crate::protocol::ResponseError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One labeled input to replay against the target program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Encoded position written to the solver's stdin
    pub input: String,
    /// Label the solver is expected to report (compared verbatim)
    pub expected_label: String,
}

impl TestCase {
    /// Create a new test case
    pub fn new(input: impl Into<String>, expected_label: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_label: expected_label.into(),
        }
    }
}

/// Result of one successfully completed test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Reported label matched the expected label exactly
    pub is_correct: bool,
    /// Solver-reported search effort (e.g. explored nodes)
    pub effort_metric: u64,
    /// Solver-reported solve time in microseconds
    pub elapsed_microseconds: u64,
    /// Harness-measured time from launch until the process was reaped
    pub wall_clock_micros: u64,
}

/// Why a test case produced no outcome.
///
/// None of these abort the batch; the case is simply excluded from aggregation.
#[derive(Debug, Error)]
pub enum CaseFailure {
    /// Process could not be spawned
    #[error("failed to launch target: {0}")]
    Launch(#[source] std::io::Error),

    /// Writing the request, reading stdout or waiting failed
    #[error("I/O error talking to target: {0}")]
    Io(#[from] std::io::Error),

    /// Deadline passed; the process was killed
    #[error("target exceeded timeout of {0:?}")]
    Timeout(Duration),

    /// Stdout is not UTF-8
    #[error("target output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Stdout does not hold a valid response
    #[error("malformed target response: {0}")]
    MalformedResponse(#[from] ResponseError),
}

impl CaseFailure {
    /// Short machine-friendly name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            CaseFailure::Launch(_) => "launch",
            CaseFailure::Io(_) => "io",
            CaseFailure::Timeout(_) => "timeout",
            CaseFailure::Decode(_) | CaseFailure::MalformedResponse(_) => "malformed",
        }
    }
}
