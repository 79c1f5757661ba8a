use crate::calendar::{day_context::DayContext, day_policy::DayPolicy, types::ClosedReason};

pub struct BlackoutPolicy;

impl DayPolicy for BlackoutPolicy {
    fn closes(&self, ctx: &DayContext<'_>) -> Option<ClosedReason> {
        if ctx.config.is_blackout_date(ctx.date) {
            Some(ClosedReason::Blackout { date: ctx.date })
        } else {
            None
        }
    }
}
