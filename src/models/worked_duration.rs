use serde::Serialize;
use std::fmt;

/// Net worked time in minutes. May be negative when the break is longer than
/// the shift even after the overnight wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkedDuration {
    pub minutes: i64,
}

impl WorkedDuration {
    pub fn new(minutes: i64) -> Self {
        Self { minutes }
    }

    /// Floor division, so -59 minutes gives -1.
    pub fn hours_part(&self) -> i64 {
        self.minutes.div_euclid(60)
    }

    /// Truncated remainder: the sign follows `minutes`.
    pub fn minutes_part(&self) -> i64 {
        self.minutes % 60
    }
}

impl fmt::Display for WorkedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} h {} min", self.hours_part(), self.minutes_part())
    }
}
