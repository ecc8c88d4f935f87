use crate::models::time_field::TimeField;
use serde::Serialize;
use std::fmt;

/// Hour/minute pair used for start, end and break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeOfDay {
    pub hour: TimeField,
    pub minute: TimeField,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: TimeField::Value(hour),
            minute: TimeField::Value(minute),
        }
    }

    /// `hour * 60 + minute`, or `None` as soon as one half is unset.
    pub fn total_minutes(&self) -> Option<i64> {
        let h = self.hour.value()? as i64;
        let m = self.minute.value()? as i64;
        Some(h * 60 + m)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.hour.value().map(|v| format!("{v:02}"));
        let m = self.minute.value().map(|v| format!("{v:02}"));
        write!(
            f,
            "{}:{}",
            h.as_deref().unwrap_or("--"),
            m.as_deref().unwrap_or("--")
        )
    }
}
