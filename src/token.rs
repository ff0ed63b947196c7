//! Duration <-> share-token codec.
//!
//! A target time travels in share links as `"H-MM-SS"` (dashes keep it
//! URL-safe; colons are accepted on the way in). Decoding is total: anything
//! unparseable falls back to the default target rather than erroring.

/// Fallback target when no usable value is available anywhere (4 hours).
pub const DEFAULT_MINUTES: f64 = 240.0;

/// Encode a total-minutes target as a `"H-MM-00"` token.
///
/// The seconds segment is always literal `00`; sub-minute precision is
/// dropped.
pub fn encode(total_minutes: f64) -> String {
    let hours = (total_minutes / 60.0).floor() as i64;
    let minutes = (total_minutes % 60.0).floor() as i64;
    format!("{}-{:02}-00", hours, minutes)
}

/// Decode a `"H-MM-SS"` or `"H:MM:SS"` token into total minutes.
///
/// Never fails: fewer than two segments yields [`DEFAULT_MINUTES`]; a
/// missing or non-numeric segment counts as 0; a present seconds segment
/// contributes `seconds / 60`.
pub fn decode(token: &str) -> f64 {
    let normalized = token.replace('-', ":");
    let parts: Vec<&str> = normalized.split(':').collect();
    if parts.len() < 2 {
        return DEFAULT_MINUTES;
    }
    let hours = parts[0].trim().parse::<i64>().unwrap_or(0);
    let minutes = parts[1].trim().parse::<i64>().unwrap_or(0);
    let seconds = parts
        .get(2)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0);
    (hours * 60 + minutes) as f64 + seconds as f64 / 60.0
}
