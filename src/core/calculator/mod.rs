//! Duration calculator: net worked time from start, end and break.

pub mod duration;

use crate::models::{TimeOfDay, WorkedDuration};

pub use duration::{MINUTES_PER_DAY, worked_duration, worked_minutes};

/// Shown whenever at least one field is empty.
pub const EMPTY_RESULT: &str = "0 h 0 min";

/// Formatted net worked time, `"{H} h {M} min"`. Never fails.
pub fn calculate_hours(start: &TimeOfDay, end: &TimeOfDay, brk: &TimeOfDay) -> String {
    match worked_duration(start, end, brk) {
        Some(d) => d.to_string(),
        None => EMPTY_RESULT.to_string(),
    }
}

/// Convenience for callers that already hold a duration.
pub fn format_duration(d: Option<WorkedDuration>) -> String {
    d.map(|d| d.to_string())
        .unwrap_or_else(|| EMPTY_RESULT.to_string())
}
