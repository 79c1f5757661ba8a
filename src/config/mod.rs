pub mod business_time_config;
pub mod config_store;
pub mod raw_config;

pub use business_time_config::BusinessTimeConfig;
pub use config_store::ConfigStore;
pub use raw_config::RawBusinessTimeConfig;
