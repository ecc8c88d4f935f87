use crate::models::time_field::FieldKind;

/// One of the six inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    StartHour,   // sh
    StartMinute, // sm
    EndHour,     // eh
    EndMinute,   // em
    BreakHour,   // bh
    BreakMinute, // bm
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::StartHour,
        FieldId::StartMinute,
        FieldId::EndHour,
        FieldId::EndMinute,
        FieldId::BreakHour,
        FieldId::BreakMinute,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::StartHour | FieldId::EndHour | FieldId::BreakHour => FieldKind::Hour,
            FieldId::StartMinute | FieldId::EndMinute | FieldId::BreakMinute => FieldKind::Minute,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FieldId::StartHour => "start-hour",
            FieldId::StartMinute => "start-minute",
            FieldId::EndHour => "end-hour",
            FieldId::EndMinute => "end-minute",
            FieldId::BreakHour => "break-hour",
            FieldId::BreakMinute => "break-minute",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            FieldId::StartHour => "sh",
            FieldId::StartMinute => "sm",
            FieldId::EndHour => "eh",
            FieldId::EndMinute => "em",
            FieldId::BreakHour => "bh",
            FieldId::BreakMinute => "bm",
        }
    }

    /// Accepts the long or short code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        FieldId::ALL
            .into_iter()
            .find(|f| f.code() == c || f.short_code() == c)
    }
}
