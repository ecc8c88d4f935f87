//! Formatting utilities used for CLI output.

use crate::models::{FieldId, TimeField};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// One line of the `show` listing, e.g. `start-hour     9 h`.
pub fn describe_field(field: FieldId, value: TimeField) -> String {
    let shown = match value {
        TimeField::Unset => "(empty)".to_string(),
        TimeField::Value(v) => v.to_string(),
    };
    format!(
        "{} {} {}",
        pad_right(field.code(), 14),
        shown,
        field.kind().label()
    )
}
