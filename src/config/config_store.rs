//! Hot-reloadable holder for the active [`BusinessTimeConfig`].
//!
//! Readers take one `Arc` snapshot per computation, so a concurrent
//! [`ConfigStore::replace`] is seen either entirely or not at all. A reload is
//! validated completely before it is stored; a rejected reload leaves the
//! previous config active.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use tracing::info;

use crate::config::BusinessTimeConfig;
use crate::estimation::{DeliveryEstimate, DeliveryEstimator, DeliveryQuote};
use crate::scheduling::CutoffScheduler;
use crate::types::Instant;

#[derive(Clone)]
pub struct ConfigStore {
    current: Arc<ArcSwap<BusinessTimeConfig>>,
}

impl ConfigStore {
    pub fn new(config: BusinessTimeConfig) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BusinessTimeConfig::from_file(path)?))
    }

    pub fn snapshot(&self) -> Arc<BusinessTimeConfig> {
        self.current.load_full()
    }

    pub fn replace(&self, config: BusinessTimeConfig) {
        info!(
            timezone = config.timezone().name(),
            cutoff_hour = config.cutoff_hour(),
            business_start_hour = config.business_start_hour(),
            blackout_dates = config.blackout_dates().len(),
            "business time config replaced"
        );
        self.current.store(Arc::new(config));
    }

    pub fn reload_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let config = BusinessTimeConfig::from_file(path)
            .with_context(|| format!("config reload from {} rejected", path.display()))?;

        self.replace(config);
        Ok(())
    }

    pub fn next_cutoff(&self, now: Instant) -> Instant {
        let config = self.snapshot();
        CutoffScheduler::for_config(&config).next_cutoff(now)
    }

    pub fn estimate_delivery(&self, order: Instant) -> Instant {
        self.estimate(order).delivery
    }

    pub fn estimate(&self, order: Instant) -> DeliveryEstimate {
        let config = self.snapshot();
        DeliveryEstimator::for_config(&config).estimate(order)
    }

    pub fn quote(&self, now: Instant) -> DeliveryQuote {
        let config = self.snapshot();
        DeliveryQuote::at(now, &config)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(BusinessTimeConfig::default())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &self.snapshot())
            .finish()
    }
}
