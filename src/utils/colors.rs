/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Result color:
/// empty fields → grey
/// \<0 → red
/// otherwise → green
pub fn color_for_result(worked_minutes: Option<i64>) -> &'static str {
    match worked_minutes {
        None => GREY,
        Some(m) if m < 0 => RED,
        Some(_) => GREEN,
    }
}

/// Wrap the formatted result in its color.
///
/// Example:
/// `colorize_result("0 h 0 min", None)` → "<grey>0 h 0 min<reset>"
pub fn colorize_result(text: &str, worked_minutes: Option<i64>) -> String {
    format!("{}{text}{RESET}", color_for_result(worked_minutes))
}
