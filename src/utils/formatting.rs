//! Formatting utilities used for CLI and export outputs.

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Percent with up to 3 decimals and no trailing zeros (`25`, `12.5`, `3.333`).
pub fn format_percent(value: f64) -> String {
    let s = format!("{:.3}", round_to(value, 3));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// US ZIP codes keep their leading zeros.
pub fn format_zip(zip: i64) -> String {
    format!("{:05}", zip)
}
