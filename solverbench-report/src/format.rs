//! Value Formatting

/// Render a microsecond value with a unit chosen by magnitude.
///
/// `>= 1_000_000` renders as seconds, `>= 1_000` as milliseconds, otherwise
/// microseconds; always two decimals.
pub fn format_time_compact(us: f64) -> String {
    if us >= 1_000_000.0 {
        format!("{:.2}s", us / 1_000_000.0)
    } else if us >= 1_000.0 {
        format!("{:.2}ms", us / 1_000.0)
    } else {
        format!("{:.2}µs", us)
    }
}

/// `mean ± stddev` with each side unit-scaled independently
pub fn format_time_mean_std(mean_us: f64, std_dev_us: f64) -> String {
    format!(
        "{} ± {}",
        format_time_compact(mean_us),
        format_time_compact(std_dev_us)
    )
}

/// `mean ± stddev` for the effort metric, plain numbers with two decimals
pub fn format_effort_mean_std(mean: f64, std_dev: f64) -> String {
    format!("{:.2} ± {:.2}", mean, std_dev)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortest rendering of an already-rounded rate, keeping a trailing `.0` for
/// whole numbers (`800.0`, `1234.57`). A zero rate renders as `0`.
pub fn format_rate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
