//! Usage recording
//!
//! Every provider attempt, successful or not, ends up here exactly once.

use super::health::{HealthTracker, ProviderEntry};
use crate::core::providers::ProviderId;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Applies attempt outcomes to a provider entry
pub struct UsageRecorder;

impl UsageRecorder {
    /// Fold one attempt into health and usage
    ///
    /// Success decrements `consecutive_errors` by one instead of resetting it,
    /// so a flapping provider regains trust gradually. The average response
    /// time uses exponential smoothing with alpha 0.5 and only moves on success.
    pub fn apply(entry: &mut ProviderEntry, latency_ms: f64, success: bool, now: DateTime<Utc>) {
        let health = &mut entry.health;
        let usage = &mut entry.usage;

        if success {
            health.consecutive_errors = health.consecutive_errors.saturating_sub(1);
            usage.avg_response_time_ms = (usage.avg_response_time_ms + latency_ms) / 2.0;
        } else {
            health.consecutive_errors = health.consecutive_errors.saturating_add(1);
            usage.errors_today = usage.errors_today.saturating_add(1);
        }

        usage.requests_today = usage.requests_today.saturating_add(1);
        health.last_response_time_ms = latency_ms;
        health.last_checked_at = Some(now);
    }
}

impl HealthTracker {
    /// Record the outcome of one attempt
    pub(crate) fn record(&self, provider: ProviderId, latency_ms: f64, success: bool) {
        let mut state = self.state.lock();
        let Some(entry) = state.entries.get_mut(&provider) else {
            warn!(provider = %provider, "attempt recorded for untracked provider");
            return;
        };

        UsageRecorder::apply(entry, latency_ms, success, Utc::now());

        debug!(
            provider = %provider,
            success,
            latency_ms,
            consecutive_errors = entry.health.consecutive_errors,
            "attempt recorded"
        );
    }
}
