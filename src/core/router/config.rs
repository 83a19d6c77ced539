//! Router configuration types
//!
//! `RoutingConfig` is supplied when the router is built and only changes
//! through `AiRouter::update_config`.

use super::error::RouterError;
use crate::core::providers::ProviderId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Router configuration
///
/// ## Defaults
///
/// - `primary`: openai
/// - `fallback_chain`: [gemini, client-side]
/// - `max_consecutive_errors_before_demotion`: 3
/// - `failover_cooldown_ms`: 30000
/// - `attempt_timeout_ms`: 30000
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Provider tried first on every call
    #[serde(default = "default_primary")]
    pub primary: ProviderId,

    /// Providers considered, in order, when the primary does not qualify
    #[serde(default = "default_fallback_chain")]
    pub fallback_chain: Vec<ProviderId>,

    /// A provider with this many consecutive errors is skipped by selection
    #[serde(default = "default_max_consecutive_errors")]
    pub max_consecutive_errors_before_demotion: u32,

    /// Minimum time between two selections of a non-primary provider
    #[serde(default = "default_failover_cooldown_ms")]
    pub failover_cooldown_ms: u64,

    /// Upper bound for a single provider attempt
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            fallback_chain: default_fallback_chain(),
            max_consecutive_errors_before_demotion: default_max_consecutive_errors(),
            failover_cooldown_ms: default_failover_cooldown_ms(),
            attempt_timeout_ms: default_attempt_timeout_ms(),
        }
    }
}

impl RoutingConfig {
    pub fn new(primary: ProviderId, fallback_chain: Vec<ProviderId>) -> Self {
        Self {
            primary,
            fallback_chain,
            ..Default::default()
        }
    }

    pub fn with_failover_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.failover_cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_attempt_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.attempt_timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_consecutive_errors(mut self, max: u32) -> Self {
        self.max_consecutive_errors_before_demotion = max;
        self
    }

    pub fn failover_cooldown(&self) -> Duration {
        Duration::from_millis(self.failover_cooldown_ms)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    /// Primary followed by the fallback chain
    pub fn ordered_providers(&self) -> Vec<ProviderId> {
        let mut ordered = vec![self.primary];
        ordered.extend(self.fallback_chain.iter().copied());
        ordered
    }

    pub fn validate(&self) -> Result<(), RouterError> {
        if self.max_consecutive_errors_before_demotion == 0 {
            return Err(RouterError::InvalidConfig(
                "max_consecutive_errors_before_demotion must be at least 1".to_string(),
            ));
        }
        if self.attempt_timeout_ms == 0 {
            return Err(RouterError::InvalidConfig(
                "attempt_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.fallback_chain.contains(&self.primary) {
            return Err(RouterError::InvalidConfig(format!(
                "primary provider {} must not appear in the fallback chain",
                self.primary
            )));
        }
        let mut seen = HashSet::new();
        for provider in &self.fallback_chain {
            if !seen.insert(provider) {
                return Err(RouterError::InvalidConfig(format!(
                    "provider {} appears twice in the fallback chain",
                    provider
                )));
            }
        }
        Ok(())
    }
}

fn default_primary() -> ProviderId {
    ProviderId::OpenAi
}

fn default_fallback_chain() -> Vec<ProviderId> {
    vec![ProviderId::Gemini, ProviderId::ClientSide]
}

fn default_max_consecutive_errors() -> u32 {
    3
}

fn default_failover_cooldown_ms() -> u64 {
    30_000
}

fn default_attempt_timeout_ms() -> u64 {
    30_000
}
