//! Routing configuration section

use crate::core::router::RoutingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Routing policy plus the availability probe schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingSection {
    #[serde(flatten)]
    pub policy: RoutingConfig,
    /// Seconds between availability probes, 0 disables the probe
    #[serde(default = "default_probe_interval_secs")]
    pub probe_interval_secs: u64,
}

impl Default for RoutingSection {
    fn default() -> Self {
        Self {
            policy: RoutingConfig::default(),
            probe_interval_secs: default_probe_interval_secs(),
        }
    }
}

impl RoutingSection {
    /// Probe interval, `None` when disabled
    pub fn probe_interval(&self) -> Option<Duration> {
        (self.probe_interval_secs > 0).then(|| Duration::from_secs(self.probe_interval_secs))
    }
}

fn default_probe_interval_secs() -> u64 {
    60
}
