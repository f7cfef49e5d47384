//! Configuration loading from solverbench.toml
//!
//! An optional `solverbench.toml` is discovered by walking up from the current
//! directory. CLI flags override anything set there.

use crate::error::HarnessError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use solverbench_report::OutputFormat;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = "solverbench.toml";

/// Per-case timeout used when neither the CLI nor the config file sets one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Contents of `solverbench.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SolverBenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Per-case timeout (e.g., "10s", "500ms")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Regex applied to dataset file names
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            filter: None,
        }
    }
}

fn default_timeout() -> String {
    "10s".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "csv", "json" or "human"
    #[serde(default = "default_format")]
    pub format: String,
    /// Show the per-dataset progress bar
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "csv".to_string()
}
fn default_progress() -> bool {
    true
}

impl SolverBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "ignoring unreadable config: {e:#}");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Configured timeout, falling back to the default on a bad value
    pub fn timeout(&self) -> Duration {
        Self::parse_duration(&self.runner.timeout).unwrap_or_else(|e| {
            tracing::warn!("invalid runner.timeout {:?}: {e:#}", self.runner.timeout);
            DEFAULT_TIMEOUT
        })
    }

    /// Configured output format, falling back to CSV on a bad value
    pub fn format(&self) -> OutputFormat {
        self.output.format.parse().unwrap_or_else(|e: String| {
            tracing::warn!("{e}, using csv");
            OutputFormat::Csv
        })
    }

    /// Parse duration string (e.g., "3s", "500ms", "2m")
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(anyhow::anyhow!("Duration must be positive: {}", s));
        }

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok(Duration::from_nanos((value * multiplier as f64).round() as u64))
    }
}

/// Fully resolved, immutable configuration of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Directory whose regular files are the datasets
    pub dataset_directory: PathBuf,
    /// Where the report artifact is written
    pub output_path: PathBuf,
    /// Wall-clock limit per test case, measured from process launch
    pub per_case_timeout: Duration,
    /// Target program and its own arguments, passed through untouched
    pub target_command: Vec<String>,
    /// Encoding of the report artifact
    pub format: OutputFormat,
    /// Only datasets whose file name matches are run
    pub filter: Option<Regex>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl BenchmarkConfig {
    /// Configuration with default timeout, CSV output, no filter and no progress bar
    pub fn new(
        dataset_directory: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        target_command: Vec<String>,
    ) -> Self {
        Self {
            dataset_directory: dataset_directory.into(),
            output_path: output_path.into(),
            per_case_timeout: DEFAULT_TIMEOUT,
            target_command,
            format: OutputFormat::Csv,
            filter: None,
            show_progress: false,
        }
    }

    /// Fail fast when no target command was given
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.target_command.is_empty() {
            return Err(HarnessError::MissingCommand);
        }
        if self.per_case_timeout.is_zero() {
            return Err(HarnessError::InvalidTimeout(0.0));
        }
        Ok(())
    }
}

/// Validate a timeout given in seconds on the command line
pub fn timeout_from_secs(secs: f64) -> Result<Duration, HarnessError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(HarnessError::InvalidTimeout(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| HarnessError::InvalidTimeout(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverBenchConfig::default();
        assert_eq!(config.runner.timeout, "10s");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.format(), OutputFormat::Csv);
        assert!(config.output.progress);
        assert!(config.runner.filter.is_none());
    }

    #[test]
    fn test_parse_duration() {
        let parse = |s| SolverBenchConfig::parse_duration(s).unwrap();
        assert_eq!(parse("3s"), Duration::from_secs(3));
        assert_eq!(parse("500ms"), Duration::from_millis(500));
        assert_eq!(parse("100us"), Duration::from_micros(100));
        assert_eq!(parse("2m"), Duration::from_secs(120));
        assert_eq!(parse("1.5s"), Duration::from_millis(1500));
        assert_eq!(parse("7"), Duration::from_secs(7));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(SolverBenchConfig::parse_duration("").is_err());
        assert!(SolverBenchConfig::parse_duration("fast").is_err());
        assert!(SolverBenchConfig::parse_duration("10 parsecs").is_err());
        assert!(SolverBenchConfig::parse_duration("-1s").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [runner]
            timeout = "250ms"
            filter = "^endgame"

            [output]
            format = "json"
        "#;

        let config: SolverBenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.runner.filter.as_deref(), Some("^endgame"));
        assert_eq!(config.format(), OutputFormat::Json);
        // Defaults should still apply
        assert!(config.output.progress);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let toml_str = r#"
            [runner]
            timeout = "soon"
            [output]
            format = "xml"
        "#;
        let config: SolverBenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.format(), OutputFormat::Csv);
    }

    #[test]
    fn test_timeout_from_secs() {
        assert_eq!(timeout_from_secs(10.0).unwrap(), Duration::from_secs(10));
        assert_eq!(timeout_from_secs(0.25).unwrap(), Duration::from_millis(250));
        assert!(matches!(
            timeout_from_secs(0.0),
            Err(HarnessError::InvalidTimeout(_))
        ));
        assert!(timeout_from_secs(-3.0).is_err());
        assert!(timeout_from_secs(f64::NAN).is_err());
        assert!(timeout_from_secs(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_requires_command() {
        let config = BenchmarkConfig::new("data", "out.csv", Vec::new());
        assert!(matches!(config.validate(), Err(HarnessError::MissingCommand)));

        let config = BenchmarkConfig::new("data", "out.csv", vec!["solver".to_string()]);
        assert!(config.validate().is_ok());
    }
}
