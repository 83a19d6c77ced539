//! Core router for AI provider selection, failover and health tracking
//!
//! This module dispatches logical operations to one of several interchangeable
//! providers, tracking provider health and failing over along a configured
//! chain.
//!
//! ## Module Structure
//!
//! - `config` - Routing configuration (primary, fallback chain, thresholds)
//! - `error` - Router construction errors
//! - `health` - Per-provider health and usage state behind one lock
//! - `selection` - Pure selection policy and the tracker's `choose`
//! - `usage` - Attempt outcome recording
//! - `fallback` - Operation results and the attempt budget
//! - `router` - Core AiRouter struct
//! - `execute_impl` - Failover execution with the attempt budget
//! - `probe` - Periodic availability probe
//! - `status` - System status snapshot

pub mod config;
pub mod error;
pub mod execute_impl;
pub mod fallback;
pub mod health;
pub mod probe;
pub mod router;
pub mod selection;
pub mod status;
pub mod usage;

#[cfg(test)]
pub(crate) mod tests;

pub use config::RoutingConfig;
pub use error::RouterError;
pub use fallback::{AttemptBudget, MAX_ATTEMPTS_PER_CALL, OperationResult};
pub use health::{HealthTracker, ProviderEntry, ProviderHealth, UsageStats};
pub use router::AiRouter;
pub use selection::{Selection, cooldown_elapsed, select};
pub use status::{SystemHealth, SystemStatus};
pub use usage::UsageRecorder;
