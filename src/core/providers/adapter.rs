//! Provider adapter trait
//!
//! Adapters are the router's only view of an upstream AI service. They turn a
//! logical `Operation` into raw response text and report whether they can be
//! used at all (credentials present, endpoint reachable).

use super::error::ProviderError;
use super::types::{Capabilities, Operation, ProviderId};
use async_trait::async_trait;

#[async_trait]
pub trait ProviderAdapter: Send + Sync + std::fmt::Debug {
    /// Identity of this provider
    fn id(&self) -> ProviderId;

    /// Static capability flags
    fn capabilities(&self) -> Capabilities;

    /// Availability probe
    async fn is_available(&self) -> bool;

    /// Execute an operation and return the raw response text
    async fn invoke(&self, operation: &Operation) -> Result<String, ProviderError>;
}
