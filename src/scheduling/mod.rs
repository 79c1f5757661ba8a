pub mod cutoff_scheduler;
pub mod hour_setter;

pub use cutoff_scheduler::CutoffScheduler;
pub use hour_setter::{set_hour_in_zone, set_hour_or_best_guess};
