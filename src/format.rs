/// Time and pace display formatting.
///
/// Both functions are total: bad input (NaN or negative) degrades to a
/// dash-filled sentinel instead of an error, so callers can render whatever
/// they are handed.

/// Format a duration in seconds as `H:MM:SS` (hours unpadded).
///
/// Returns `"--:--:--"` for NaN or negative input. There is no upper bound;
/// arbitrarily large hour counts render in full.
pub fn format_time(total_seconds: f64) -> String {
    if total_seconds.is_nan() || total_seconds < 0.0 {
        return "--:--:--".to_string();
    }
    let hours = (total_seconds / 3600.0).floor() as u64;
    let minutes = ((total_seconds % 3600.0) / 60.0).floor() as u64;
    // Seconds round to nearest and are not carried when they hit 60; the
    // displayed "0:00:60" matches the reference behavior.
    let seconds = (total_seconds % 60.0).round() as u64;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a per-unit-distance pace in seconds as `M:SS` (minutes unpadded).
///
/// Returns `"--:--"` for NaN or negative input.
pub fn format_pace(seconds_per_unit: f64) -> String {
    if seconds_per_unit.is_nan() || seconds_per_unit < 0.0 {
        return "--:--".to_string();
    }
    let minutes = (seconds_per_unit / 60.0).floor() as u64;
    let seconds = (seconds_per_unit % 60.0).round() as u64;
    format!("{}:{:02}", minutes, seconds)
}
