//! Per-provider health and usage state
//!
//! All mutable routing state lives behind one coarse `parking_lot::Mutex`:
//! the health map, the usage counters and the last failover instant. Selection
//! reads several providers and may write the failover timestamp, so a single
//! lock keeps each `choose` and each `record` atomic with respect to every
//! other request.

use crate::core::providers::ProviderId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Health of one provider as seen by the router
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderHealth {
    /// Result of the last availability probe
    pub available: bool,
    /// Decremented by one per success, never below zero
    pub consecutive_errors: u32,
    /// Last time an attempt or probe touched this provider
    pub last_checked_at: Option<DateTime<Utc>>,
    /// Latency of the most recent attempt
    pub last_response_time_ms: f64,
}

impl Default for ProviderHealth {
    fn default() -> Self {
        Self {
            available: true,
            consecutive_errors: 0,
            last_checked_at: None,
            last_response_time_ms: 0.0,
        }
    }
}

impl ProviderHealth {
    /// Whether selection may pick this provider
    pub fn qualifies(&self, max_consecutive_errors: u32) -> bool {
        self.available && self.consecutive_errors < max_consecutive_errors
    }
}

/// Accumulating daily counters for one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub requests_today: u64,
    pub errors_today: u64,
    pub avg_response_time_ms: f64,
}

/// Health and usage of one provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderEntry {
    pub health: ProviderHealth,
    pub usage: UsageStats,
}

#[derive(Debug, Default)]
pub(crate) struct TrackerState {
    pub(crate) entries: BTreeMap<ProviderId, ProviderEntry>,
    pub(crate) last_failover_at: Option<Instant>,
}

impl TrackerState {
    pub(crate) fn health_view(&self) -> BTreeMap<ProviderId, ProviderHealth> {
        self.entries
            .iter()
            .map(|(id, entry)| (*id, entry.health.clone()))
            .collect()
    }
}

/// Shared health state for every registered provider
///
/// Providers start out available; the first availability probe corrects that.
#[derive(Debug, Default)]
pub struct HealthTracker {
    pub(crate) state: Mutex<TrackerState>,
}

impl HealthTracker {
    /// Track the given providers
    pub fn new(providers: impl IntoIterator<Item = ProviderId>) -> Self {
        let entries = providers
            .into_iter()
            .map(|id| (id, ProviderEntry::default()))
            .collect();
        Self {
            state: Mutex::new(TrackerState {
                entries,
                last_failover_at: None,
            }),
        }
    }

    /// Whether the provider is tracked
    pub fn contains(&self, provider: ProviderId) -> bool {
        self.state.lock().entries.contains_key(&provider)
    }

    /// Copy of one provider's health
    pub fn health(&self, provider: ProviderId) -> Option<ProviderHealth> {
        self.state
            .lock()
            .entries
            .get(&provider)
            .map(|entry| entry.health.clone())
    }

    /// Copy of one provider's usage counters
    pub fn usage(&self, provider: ProviderId) -> Option<UsageStats> {
        self.state
            .lock()
            .entries
            .get(&provider)
            .map(|entry| entry.usage.clone())
    }

    /// Consistent copy of every tracked provider
    pub fn snapshot(&self) -> BTreeMap<ProviderId, ProviderEntry> {
        self.state.lock().entries.clone()
    }

    /// Instant of the most recent selection of a non-primary provider
    pub fn last_failover_at(&self) -> Option<Instant> {
        self.state.lock().last_failover_at
    }

    /// Apply the result of an availability probe
    pub(crate) fn mark_availability(&self, provider: ProviderId, available: bool) {
        let mut state = self.state.lock();
        if let Some(entry) = state.entries.get_mut(&provider) {
            entry.health.available = available;
            entry.health.last_checked_at = Some(Utc::now());
        }
    }

    /// Clear the daily counters, keeping health untouched
    pub(crate) fn reset_usage_counters(&self) {
        let mut state = self.state.lock();
        for entry in state.entries.values_mut() {
            entry.usage.requests_today = 0;
            entry.usage.errors_today = 0;
        }
    }
}
