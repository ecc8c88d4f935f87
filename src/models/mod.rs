pub mod field_id;
pub mod time_field;
pub mod time_of_day;
pub mod worked_duration;

pub use field_id::FieldId;
pub use time_field::{FieldKind, TimeField};
pub use time_of_day::TimeOfDay;
pub use worked_duration::WorkedDuration;
