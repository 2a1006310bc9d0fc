use std::future::Future;
use std::time::{Duration, Instant};
use tracing::info;

const SI_UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Wrapper function to measure duration of an async operation that returns Result
pub async fn measure_dur_async<F, Fut, T, E>(
    metric_name: &str,
    operation: F,
    trace_log_fn: Option<fn(&T) -> String>,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let result = operation().await;
    let dur = start.elapsed();
    log_dur(metric_name, result.as_ref().ok(), trace_log_fn, dur);
    result
}

/// Wrapper function to measure duration of a synchronous operation that returns Result
pub fn measure_dur<F, T, E>(
    metric_name: &str,
    operation: F,
    trace_log_fn: Option<fn(&T) -> String>,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let result = operation();
    let dur = start.elapsed();
    log_dur(metric_name, result.as_ref().ok(), trace_log_fn, dur);
    result
}

fn log_dur<T>(
    metric_name: &str,
    value: Option<&T>,
    trace_log_fn: Option<fn(&T) -> String>,
    dur: Duration,
) {
    let log_line = value
        .and_then(|v| trace_log_fn.map(|f| f(v)))
        .unwrap_or_default();
    info!("{} | {}, took={}", metric_name, log_line, dur.as_millis());
}

/// Human readable byte size using SI units, e.g. `83 MB` or `1.5 kB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut scaled = bytes as f64;
    let mut exponent = 0;
    while scaled >= 1000.0 && exponent < SI_UNITS.len() - 1 {
        scaled /= 1000.0;
        exponent += 1;
    }
    let value = (scaled * 10.0 + 0.5).floor() / 10.0;

    if value < 10.0 {
        format!("{:.1} {}", value, SI_UNITS[exponent])
    } else {
        format!("{:.0} {}", value, SI_UNITS[exponent])
    }
}

/// Integer with thousands separators, e.g. `1,234,567`.
pub fn format_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Fixed-precision decimal with thousands separators, e.g. `12,345.68`.
pub fn format_decimal(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // no "-0.00"
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
