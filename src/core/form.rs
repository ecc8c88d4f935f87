//! State of the six-input work form.

use crate::core::calculator;
use crate::core::normalizer;
use crate::models::{FieldId, TimeField, TimeOfDay, WorkedDuration};
use tracing::trace;

/// Initial values of the three pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub break_time: TimeOfDay,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start: TimeOfDay::new(9, 0),
            end: TimeOfDay::new(18, 0),
            break_time: TimeOfDay::new(1, 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkForm {
    defaults: FormDefaults,
    start: TimeOfDay,
    end: TimeOfDay,
    break_time: TimeOfDay,
}

impl Default for WorkForm {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

impl WorkForm {
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            defaults,
            start: defaults.start,
            end: defaults.end,
            break_time: defaults.break_time,
        }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn break_time(&self) -> TimeOfDay {
        self.break_time
    }

    pub fn get(&self, field: FieldId) -> TimeField {
        *self.slot(field)
    }

    fn slot(&self, field: FieldId) -> &TimeField {
        match field {
            FieldId::StartHour => &self.start.hour,
            FieldId::StartMinute => &self.start.minute,
            FieldId::EndHour => &self.end.hour,
            FieldId::EndMinute => &self.end.minute,
            FieldId::BreakHour => &self.break_time.hour,
            FieldId::BreakMinute => &self.break_time.minute,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut TimeField {
        match field {
            FieldId::StartHour => &mut self.start.hour,
            FieldId::StartMinute => &mut self.start.minute,
            FieldId::EndHour => &mut self.end.hour,
            FieldId::EndMinute => &mut self.end.minute,
            FieldId::BreakHour => &mut self.break_time.hour,
            FieldId::BreakMinute => &mut self.break_time.minute,
        }
    }

    /// Apply a keystroke: `raw` is the whole text of the input after the edit.
    pub fn input(&mut self, field: FieldId, raw: &str) -> TimeField {
        let slot = self.slot_mut(field);
        let next = normalizer::normalize(raw, field.kind(), *slot);
        trace!(field = field.code(), raw, ?next, "input");
        *slot = next;
        next
    }

    /// Apply the focus reset.
    pub fn focus(&mut self, field: FieldId) -> TimeField {
        let next = normalizer::on_focus();
        *self.slot_mut(field) = next;
        next
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }

    pub fn worked_duration(&self) -> Option<WorkedDuration> {
        calculator::worked_duration(&self.start, &self.end, &self.break_time)
    }

    pub fn worked_minutes(&self) -> Option<i64> {
        self.worked_duration().map(|d| d.minutes)
    }

    /// Live result line, recomputed from the current state.
    pub fn result(&self) -> String {
        calculator::format_duration(self.worked_duration())
    }
}
