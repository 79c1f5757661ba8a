use serde::Serialize;

use crate::types::Instant;

/// How production start was chosen for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionPath {
    /// Business day, before cutoff: production starts at the order instant.
    SameDay,
    /// Business day, at or after cutoff: start hour on the next business day.
    NextBusinessDay,
    /// Ordered on a closed day: start hour on the first business day.
    ClosedDay,
}

/// Every intermediate instant of one delivery estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryEstimate {
    pub order: Instant,
    pub path: ProductionPath,
    pub production_start: Instant,
    pub production_complete: Instant,
    /// Production completion spilled into a closed day and was moved.
    pub completion_moved: bool,
    pub delivery: Instant,
}
