//! System status snapshot

use super::config::RoutingConfig;
use super::health::{ProviderEntry, ProviderHealth, UsageStats};
use super::router::AiRouter;
use crate::core::providers::ProviderId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Overall health of the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Healthy,
    Degraded,
    Critical,
}

impl SystemHealth {
    /// Classify from the available provider count and the primary's error streak
    ///
    /// `critical` iff nothing is available; `degraded` iff exactly one provider
    /// is available or the primary has more than two consecutive errors.
    pub fn classify(available: usize, primary_consecutive_errors: u32) -> Self {
        if available == 0 {
            SystemHealth::Critical
        } else if available == 1 || primary_consecutive_errors > 2 {
            SystemHealth::Degraded
        } else {
            SystemHealth::Healthy
        }
    }
}

/// Read-only view of routing state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    /// Provider selection would pick right now
    pub active_provider: ProviderId,
    pub available_providers: Vec<ProviderId>,
    pub system_health: SystemHealth,
    pub per_provider_status: BTreeMap<ProviderId, ProviderHealth>,
    pub per_provider_usage: BTreeMap<ProviderId, UsageStats>,
}

impl SystemStatus {
    pub(crate) fn from_snapshot(
        config: &RoutingConfig,
        active_provider: ProviderId,
        snapshot: BTreeMap<ProviderId, ProviderEntry>,
    ) -> Self {
        let available_providers: Vec<ProviderId> = snapshot
            .iter()
            .filter(|(_, entry)| entry.health.available)
            .map(|(id, _)| *id)
            .collect();

        let primary_errors = snapshot
            .get(&config.primary)
            .map(|entry| entry.health.consecutive_errors)
            .unwrap_or(0);

        let system_health = SystemHealth::classify(available_providers.len(), primary_errors);

        let mut per_provider_status = BTreeMap::new();
        let mut per_provider_usage = BTreeMap::new();
        for (id, entry) in snapshot {
            per_provider_status.insert(id, entry.health);
            per_provider_usage.insert(id, entry.usage);
        }

        Self {
            active_provider,
            available_providers,
            system_health,
            per_provider_status,
            per_provider_usage,
        }
    }
}

impl AiRouter {
    /// Snapshot of provider health, usage and the overall system health
    pub fn system_status(&self) -> SystemStatus {
        let config = self.config();
        let active = self.tracker.peek(&config).provider;
        SystemStatus::from_snapshot(&config, active, self.tracker.snapshot())
    }
}
