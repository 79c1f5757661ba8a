use chrono::Duration;
use tracing::debug;

use crate::calendar::BusinessCalendar;
use crate::config::BusinessTimeConfig;
use crate::estimation::delivery_estimate::{DeliveryEstimate, ProductionPath};
use crate::scheduling::CutoffScheduler;
use crate::types::Instant;

/// Estimates delivery from a fixed production time plus next-business-day shipping.
#[derive(Clone, Copy)]
pub struct DeliveryEstimator<'a> {
    scheduler: CutoffScheduler<'a>,
}

impl<'a> DeliveryEstimator<'a> {
    /// Elapsed production time, not business hours.
    pub const PRODUCTION_SLA_HOURS: i64 = 24;

    pub fn for_config(config: &'a BusinessTimeConfig) -> Self {
        Self {
            scheduler: CutoffScheduler::for_config(config),
        }
    }

    fn calendar(&self) -> BusinessCalendar<'a> {
        self.scheduler.calendar()
    }

    fn start_hour(&self) -> u32 {
        self.calendar().config().business_start_hour()
    }

    pub fn estimate_delivery(&self, order: Instant) -> Instant {
        self.estimate(order).delivery
    }

    pub fn estimate(&self, order: Instant) -> DeliveryEstimate {
        let calendar = self.calendar();
        let (path, production_start) = self.production_start(order);

        let mut production_complete = production_start + Duration::hours(Self::PRODUCTION_SLA_HOURS);
        let completion_moved = !calendar.is_business_day(production_complete);

        if completion_moved {
            let open_day = calendar.ensure_business_day(production_complete);
            production_complete = self.scheduler.set_hour_in_zone(open_day, self.start_hour());
        }

        let delivery = calendar.next_business_day(production_complete);

        debug!(
            ?path,
            %order,
            %production_start,
            %production_complete,
            completion_moved,
            delivery_date = %calendar.date_of(delivery),
            "estimated delivery"
        );

        DeliveryEstimate {
            order,
            path,
            production_start,
            production_complete,
            completion_moved,
            delivery,
        }
    }

    // An open order day after cutoff and a closed order day resolve differently:
    // a blackout weekday must not count as the "today" that next_business_day skips.
    fn production_start(&self, order: Instant) -> (ProductionPath, Instant) {
        let calendar = self.calendar();

        if self.scheduler.is_before_cutoff(order) {
            return (ProductionPath::SameDay, order);
        }

        let (path, base) = if calendar.is_business_day(order) {
            (ProductionPath::NextBusinessDay, calendar.next_business_day(order))
        } else {
            (ProductionPath::ClosedDay, calendar.ensure_business_day(order))
        };

        (path, self.scheduler.set_hour_in_zone(base, self.start_hour()))
    }
}
