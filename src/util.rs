//! Small numeric helpers shared by the scoring components.

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a percentage into `[0, 100]` and round it to two decimal places.
pub fn clamp_percent(value: f64) -> f64 {
    round2(value.clamp(0.0, 100.0))
}
