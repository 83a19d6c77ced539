//! AI router core structure
//!
//! The router owns the provider registry, the shared health tracker and the
//! routing configuration. It is constructed explicitly by the calling layer
//! and shared behind an `Arc`; there is no process-wide instance.

use super::config::RoutingConfig;
use super::error::RouterError;
use super::health::{HealthTracker, ProviderHealth, UsageStats};
use super::selection::Selection;
use crate::core::providers::{ProviderId, ProviderRegistry};
use parking_lot::RwLock;
use std::collections::HashSet;
use tracing::info;

/// Multi-provider AI router
///
/// Dispatches operations to registered providers, tracks their health and
/// fails over along the configured chain.
#[derive(Debug)]
pub struct AiRouter {
    /// Registered provider adapters
    pub(crate) registry: ProviderRegistry,

    /// Health and usage state, one entry per registered provider
    pub(crate) tracker: HealthTracker,

    /// Routing configuration, replaced only through `update_config`
    pub(crate) config: RwLock<RoutingConfig>,
}

impl AiRouter {
    /// Create a router over the given providers
    pub fn new(registry: ProviderRegistry, config: RoutingConfig) -> Result<Self, RouterError> {
        config.validate()?;

        let tracker = HealthTracker::new(registry.ids());
        info!(
            providers = ?registry.ids(),
            primary = %config.primary,
            fallback_chain = ?config.fallback_chain,
            "AI router created"
        );

        Ok(Self {
            registry,
            tracker,
            config: RwLock::new(config),
        })
    }

    /// Current routing configuration
    pub fn config(&self) -> RoutingConfig {
        self.config.read().clone()
    }

    /// Validate and swap the routing configuration
    ///
    /// Calls already in flight keep the configuration they started with.
    pub fn update_config(&self, config: RoutingConfig) -> Result<(), RouterError> {
        config.validate()?;
        info!(
            primary = %config.primary,
            fallback_chain = ?config.fallback_chain,
            failover_cooldown_ms = config.failover_cooldown_ms,
            "routing configuration updated"
        );
        *self.config.write() = config;
        Ok(())
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Read-only access to the health tracker
    pub fn tracker(&self) -> &HealthTracker {
        &self.tracker
    }

    pub fn health(&self, provider: ProviderId) -> Option<ProviderHealth> {
        self.tracker.health(provider)
    }

    pub fn usage(&self, provider: ProviderId) -> Option<UsageStats> {
        self.tracker.usage(provider)
    }

    /// Select the next provider, applying the failover timestamp side effect
    pub fn choose(&self, excluding: &HashSet<ProviderId>) -> Selection {
        let config = self.config.read().clone();
        self.tracker.choose(&config, excluding)
    }

    /// Clear today's request and error counters for every provider
    pub fn reset_usage_counters(&self) {
        self.tracker.reset_usage_counters();
        info!("daily usage counters reset");
    }
}
