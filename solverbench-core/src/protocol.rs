//! Solver Wire Protocol
//!
//! The target reads exactly one request line on stdin and must print at least
//! three whitespace-separated tokens on stdout before exiting:
//!
//! ```text
//! stdin:  <input>\n
//! stdout: <label> <effort> <time_microseconds> [anything else]
//! ```

use crate::MIN_RESPONSE_TOKENS;
use thiserror::Error;

/// Errors from decoding a solver response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Fewer than three tokens on stdout
    #[error("expected at least {} tokens, got {found}", MIN_RESPONSE_TOKENS)]
    TooFewTokens {
        /// Tokens actually present
        found: usize,
    },

    /// Second token is not a `u64`
    #[error("effort is not a non-negative integer: {0:?}")]
    InvalidEffort(String),

    /// Third token is not a `u64`
    #[error("time is not a non-negative integer: {0:?}")]
    InvalidTime(String),
}

/// Decoded solver response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverResponse {
    /// Label reported by the solver
    pub label: String,
    /// Search effort (e.g. explored nodes)
    pub effort: u64,
    /// Solve time in microseconds as measured by the solver
    pub time_us: u64,
}

/// Encode the request line for a single input
pub fn format_request(input: &str) -> String {
    format!("{input}\n")
}

/// Decode the solver's stdout into a response
pub fn parse_response(stdout: &str) -> Result<SolverResponse, ResponseError> {
    let tokens: Vec<&str> = stdout.split_whitespace().collect();
    if tokens.len() < MIN_RESPONSE_TOKENS {
        return Err(ResponseError::TooFewTokens {
            found: tokens.len(),
        });
    }

    let effort = tokens[1]
        .parse::<u64>()
        .map_err(|_| ResponseError::InvalidEffort(tokens[1].to_string()))?;
    let time_us = tokens[2]
        .parse::<u64>()
        .map_err(|_| ResponseError::InvalidTime(tokens[2].to_string()))?;

    Ok(SolverResponse {
        label: tokens[0].to_string(),
        effort,
        time_us,
    })
}
