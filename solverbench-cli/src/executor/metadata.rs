//! System Metadata Collection
//!
//! Collects the run configuration plus host details for report metadata.
//! Linux-specific data (CPU model, memory) degrades to "Unknown" or 0 on
//! other platforms.

use crate::config::BenchmarkConfig;
use chrono::Utc;
use solverbench_report::{ReportConfig, ReportMeta, SystemInfo};

/// Build report metadata for a run
pub fn build_report_meta(config: &BenchmarkConfig) -> ReportMeta {
    let git_commit = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit,
        system: collect_system_info(),
        config: ReportConfig {
            dataset_directory: config.dataset_directory.display().to_string(),
            target_command: config.target_command.clone(),
            per_case_timeout_secs: config.per_case_timeout.as_secs_f64(),
        },
    }
}

/// Host description; fields that cannot be read are "Unknown" or 0
fn collect_system_info() -> SystemInfo {
    let memory_gb = proc_value("/proc/meminfo", "MemTotal")
        .and_then(|value| value.split_whitespace().next()?.parse::<u64>().ok())
        .map(|kb| kb as f64 / (1024.0 * 1024.0));

    SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: proc_value("/proc/cpuinfo", "model name").unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .unwrap_or(1),
        memory_gb: memory_gb.unwrap_or(0.0),
    }
}

/// Value of the first `key: value` line in a /proc file (Linux only)
fn proc_value(path: &str, key: &str) -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    let content = std::fs::read_to_string(path).ok()?;
    content.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        (name.trim() == key).then(|| value.trim().to_string())
    })
}
