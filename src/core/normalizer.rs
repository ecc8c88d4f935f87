//! Input normalizer: turns raw typed text into a bounded `TimeField`.
//!
//! Invalid input never produces an error. Hour fields reject the edit and
//! keep their previous value, minute fields clamp to 59.

use crate::models::{FieldKind, TimeField};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]").expect("valid non-digit pattern"));

/// Maximum number of digits kept from the typed text.
const MAX_DIGITS: usize = 2;

/// Normalize `raw` for a field of the given kind.
///
/// `previous` is the value the field held before the keystroke; it is
/// returned unchanged when an hour edit is rejected.
pub fn normalize(raw: &str, kind: FieldKind, previous: TimeField) -> TimeField {
    let digits = NON_DIGITS.replace_all(raw, "");

    if digits.is_empty() {
        return TimeField::Unset;
    }

    // Only ASCII digits are left, so slicing on bytes is safe.
    let truncated = &digits[..digits.len().min(MAX_DIGITS)];

    if truncated == "00" {
        return TimeField::Value(0);
    }

    let parsed = truncated.parse::<u8>().ok();

    match kind {
        FieldKind::Hour => match parsed {
            Some(v) if v <= kind.max() => TimeField::Value(v),
            _ => {
                debug!(raw, ?previous, "hour edit rejected");
                previous
            }
        },
        FieldKind::Minute => match parsed {
            Some(v) if v <= kind.max() => TimeField::Value(v),
            _ => {
                debug!(raw, "minute clamped to {}", kind.max());
                TimeField::Value(kind.max())
            }
        },
    }
}

/// Value a field takes when it gains focus, whatever it held before.
pub fn on_focus() -> TimeField {
    TimeField::Value(0)
}
