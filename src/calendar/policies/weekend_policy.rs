use crate::calendar::{day_context::DayContext, day_policy::DayPolicy, types::ClosedReason};

pub struct WeekendPolicy;

impl WeekendPolicy {
    pub const SUNDAY: u32 = 0;
    pub const SATURDAY: u32 = 6;

    pub fn is_weekend(weekday: u32) -> bool {
        weekday == Self::SUNDAY || weekday == Self::SATURDAY
    }
}

impl DayPolicy for WeekendPolicy {
    fn closes(&self, ctx: &DayContext<'_>) -> Option<ClosedReason> {
        let weekday = ctx.date.weekday();

        if Self::is_weekend(weekday) {
            Some(ClosedReason::Weekend { weekday })
        } else {
            None
        }
    }
}
