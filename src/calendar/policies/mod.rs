pub mod blackout_policy;
pub mod weekend_policy;
