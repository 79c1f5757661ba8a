use crate::calendar::{day_context::DayContext, types::ClosedReason};

pub trait DayPolicy: Send + Sync {
    fn closes(&self, ctx: &DayContext<'_>) -> Option<ClosedReason>;
}
