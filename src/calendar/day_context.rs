use crate::config::BusinessTimeConfig;
use crate::types::CalendarDate;

pub struct DayContext<'a> {
    pub date: CalendarDate,
    pub config: &'a BusinessTimeConfig,
}
