//! Human-readable formatting helpers.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count using binary (1024) units, one decimal place.
///
/// Never promotes past `GB`: one TiB prints as `1024.0 GB`.
///
/// ```
/// use imgpredict::bytes_to_size;
/// assert_eq!(bytes_to_size(1536), "1.5 KB");
/// ```
pub fn bytes_to_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", round_half_up(value, 1), UNITS[unit])
}

/// Round to `digits` decimals, ties away from zero.
///
/// `format!("{:.1}")` alone rounds ties to even (1.25 -> "1.2"),
/// the widget shows "1.3".
pub(crate) fn round_half_up(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
