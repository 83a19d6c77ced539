//! Periodic availability probe
//!
//! Each probe asks every registered adapter whether it is available and writes
//! the answer into the tracker. A check that does not finish within the
//! attempt timeout counts as unavailable.

use super::router::AiRouter;
use crate::core::providers::ProviderId;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

impl AiRouter {
    /// Probe every registered provider once
    ///
    /// Returns the providers found available.
    pub async fn probe_availability(&self) -> Vec<ProviderId> {
        let check_timeout = self.config().attempt_timeout();

        let checks = self.registry.iter().map(|adapter| async move {
            let available = match tokio::time::timeout(check_timeout, adapter.is_available()).await
            {
                Ok(available) => available,
                Err(_) => {
                    warn!(provider = %adapter.id(), "availability check timed out");
                    false
                }
            };
            (adapter.id(), available)
        });

        let results = join_all(checks).await;

        let mut available = Vec::new();
        for (provider, is_available) in results {
            self.tracker.mark_availability(provider, is_available);
            debug!(provider = %provider, available = is_available, "availability probed");
            if is_available {
                available.push(provider);
            }
        }
        available
    }

    /// Run `probe_availability` on a fixed interval until the task is aborted
    pub fn spawn_health_probe(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        info!(interval_secs = every.as_secs(), "starting provider health probe");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let available = self.probe_availability().await;
                if available.is_empty() {
                    warn!("health probe found no available provider");
                }
            }
        })
    }
}
