pub mod delivery_estimate;
pub mod delivery_estimator;
pub mod delivery_quote;

pub use delivery_estimate::{DeliveryEstimate, ProductionPath};
pub use delivery_estimator::DeliveryEstimator;
pub use delivery_quote::DeliveryQuote;
