//! Time utilities: parsing HH:MM strings and splitting raw `H:MM` input.

use crate::models::TimeOfDay;
use chrono::{NaiveTime, Timelike};

/// Strict `HH:MM` (used for configuration values).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_hhmm(t: &str) -> Option<TimeOfDay> {
    let time = parse_time(t)?;
    Some(TimeOfDay::new(time.hour() as u8, time.minute() as u8))
}

/// Split a loose command-line value into raw hour and minute texts.
///
/// `"9:30"` → `("9", Some("30"))`, `"9"` → `("9", None)`. The texts are not
/// validated here; they go through the normalizer like typed input.
pub fn split_raw_time(s: &str) -> (&str, Option<&str>) {
    match s.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (s, None),
    }
}
