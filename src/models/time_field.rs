//! Single hour or minute input value.

use serde::Serialize;
use std::fmt;

/// Hour or minute input. Determines the validation bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Hour,
    Minute,
}

impl FieldKind {
    /// Highest value a field of this kind may hold.
    pub fn max(&self) -> u8 {
        match self {
            FieldKind::Hour => 23,
            FieldKind::Minute => 59,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Hour => "h",
            FieldKind::Minute => "min",
        }
    }
}

/// Content of one input: either cleared or a bounded number.
///
/// Serialized as `null` / number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "Option<u8>")]
pub enum TimeField {
    #[default]
    Unset,
    Value(u8),
}

impl TimeField {
    pub fn value(&self) -> Option<u8> {
        match self {
            TimeField::Unset => None,
            TimeField::Value(v) => Some(*v),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, TimeField::Unset)
    }
}

impl From<TimeField> for Option<u8> {
    fn from(f: TimeField) -> Self {
        f.value()
    }
}

impl fmt::Display for TimeField {
    /// Unset fields render as an empty string, like a cleared input box.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Unset => Ok(()),
            TimeField::Value(v) => write!(f, "{}", v),
        }
    }
}
