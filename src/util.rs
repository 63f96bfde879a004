/// Truncates to 2 decimals. Scores never round up: 12.345 -> 12.34.
pub fn floor2(x: f64) -> f64 {
    (x * 100.0).floor() / 100.0
}

/// Rounds half away from zero to 2 decimals. Used for the summary fields
/// (excess, net) at the display boundary; per-item scores use [`floor2`].
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
