use crate::models::{TimeOfDay, WorkedDuration};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Net worked minutes between `start` and `end` minus `brk`.
///
/// Returns `None` when any of the six components is unset. A negative span
/// is wrapped by one day, at most once.
pub fn worked_minutes(start: &TimeOfDay, end: &TimeOfDay, brk: &TimeOfDay) -> Option<i64> {
    let start = start.total_minutes()?;
    let end = end.total_minutes()?;
    let brk = brk.total_minutes()?;

    let mut worked = end - start - brk;
    if worked < 0 {
        worked += MINUTES_PER_DAY;
    }

    Some(worked)
}

pub fn worked_duration(start: &TimeOfDay, end: &TimeOfDay, brk: &TimeOfDay) -> Option<WorkedDuration> {
    worked_minutes(start, end, brk).map(WorkedDuration::new)
}
