use std::fmt;

use crate::types::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedReason {
    Weekend { weekday: u32 },
    Blackout { date: CalendarDate },
}

impl fmt::Display for ClosedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekend { weekday } => write!(f, "weekend (weekday {weekday})"),
            Self::Blackout { date } => write!(f, "blackout date {date}"),
        }
    }
}
