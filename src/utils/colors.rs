/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out placeholder values (`""`, `--`, `0`).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// ROR color:
/// 0 → grey
/// \< `min` → red
/// otherwise → green
pub fn colorize_ror(value: f64, rendered: &str, min: f64) -> String {
    if value == 0.0 {
        format!("{GREY}{rendered}{RESET}")
    } else if value < min {
        format!("{RED}{rendered}{RESET}")
    } else {
        format!("{GREEN}{rendered}{RESET}")
    }
}

pub fn colorize_market(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}
