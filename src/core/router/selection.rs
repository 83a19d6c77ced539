//! Provider selection policy
//!
//! `select` is a pure function of the configuration, a health view, the
//! exclusion set, the last failover instant and the current instant. The
//! tracker wraps it so the failover timestamp is written under the same lock
//! the health view was read under.
//!
//! # Flow
//!
//! 1. Primary, if not excluded and qualifying
//! 2. First qualifying, non-excluded provider of the fallback chain. While the
//!    primary is still available, only once the failover cooldown has elapsed
//!    (or no failover happened yet); an unavailable primary fails over freely
//! 3. Otherwise the primary anyway; the invoker surfaces the failure

use super::config::RoutingConfig;
use super::health::{HealthTracker, ProviderHealth};
use crate::core::providers::ProviderId;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;
use tracing::debug;

/// Outcome of one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Provider to try next
    pub provider: ProviderId,
    /// A fallback-chain provider was chosen over the primary
    pub is_failover: bool,
    /// Nothing qualified and the primary was returned regardless
    pub degraded: bool,
}

impl Selection {
    fn primary(provider: ProviderId, degraded: bool) -> Self {
        Self {
            provider,
            is_failover: false,
            degraded,
        }
    }
}

fn qualifies(
    provider: ProviderId,
    config: &RoutingConfig,
    health: &BTreeMap<ProviderId, ProviderHealth>,
    excluding: &HashSet<ProviderId>,
) -> bool {
    !excluding.contains(&provider)
        && health
            .get(&provider)
            .is_some_and(|h| h.qualifies(config.max_consecutive_errors_before_demotion))
}

/// Whether enough time has passed since the last failover
pub fn cooldown_elapsed(
    config: &RoutingConfig,
    last_failover_at: Option<Instant>,
    now: Instant,
) -> bool {
    match last_failover_at {
        None => true,
        Some(at) => now.saturating_duration_since(at) >= config.failover_cooldown(),
    }
}

/// Choose the provider to try next
///
/// The cooldown guards against flapping between a reachable but erroring
/// primary and the fallback; it never pins traffic to a primary the probe has
/// marked unavailable.
pub fn select(
    config: &RoutingConfig,
    health: &BTreeMap<ProviderId, ProviderHealth>,
    excluding: &HashSet<ProviderId>,
    last_failover_at: Option<Instant>,
    now: Instant,
) -> Selection {
    if qualifies(config.primary, config, health, excluding) {
        return Selection::primary(config.primary, false);
    }

    let primary_available = health.get(&config.primary).is_some_and(|h| h.available);

    if !primary_available || cooldown_elapsed(config, last_failover_at, now) {
        if let Some(fallback) = config
            .fallback_chain
            .iter()
            .copied()
            .find(|p| qualifies(*p, config, health, excluding))
        {
            return Selection {
                provider: fallback,
                is_failover: true,
                degraded: false,
            };
        }
    }

    Selection::primary(config.primary, true)
}

impl HealthTracker {
    /// Select a provider and record the failover instant when one happens
    pub(crate) fn choose(
        &self,
        config: &RoutingConfig,
        excluding: &HashSet<ProviderId>,
    ) -> Selection {
        let mut state = self.state.lock();
        let now = Instant::now();
        let selection = select(
            config,
            &state.health_view(),
            excluding,
            state.last_failover_at,
            now,
        );

        if selection.is_failover {
            state.last_failover_at = Some(now);
        }

        debug!(
            provider = %selection.provider,
            is_failover = selection.is_failover,
            degraded = selection.degraded,
            excluded = excluding.len(),
            "provider selected"
        );
        selection
    }

    /// What selection would return now, without touching the failover instant
    pub fn peek(&self, config: &RoutingConfig) -> Selection {
        let state = self.state.lock();
        select(
            config,
            &state.health_view(),
            &HashSet::new(),
            state.last_failover_at,
            Instant::now(),
        )
    }
}
