//! Provider Registry
//!
//! Holds the adapters the router may dispatch to, in registration order.
//! The registry is built once and handed to the router; it is never mutated
//! while requests are in flight.

use super::adapter::ProviderAdapter;
use super::types::{Capabilities, Capability, ProviderId};
use std::sync::Arc;

/// Registry of provider adapters
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn ProviderAdapter>>,
}

impl ProviderRegistry {
    /// Create new provider registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register an adapter, replacing any adapter with the same id
    pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        let id = adapter.id();
        if let Some(slot) = self.providers.iter_mut().find(|p| p.id() == id) {
            *slot = adapter;
        } else {
            self.providers.push(adapter);
        }
    }

    /// Builder-style registration
    pub fn with(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.register(adapter);
        self
    }

    /// Get adapter by id
    pub fn get(&self, id: ProviderId) -> Option<&Arc<dyn ProviderAdapter>> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Check if provider is registered
    pub fn contains(&self, id: ProviderId) -> bool {
        self.get(id).is_some()
    }

    /// Capability flags of a registered provider
    pub fn capabilities(&self, id: ProviderId) -> Option<Capabilities> {
        self.get(id).map(|p| p.capabilities())
    }

    /// Whether a registered provider offers `capability`
    pub fn supports(&self, id: ProviderId, capability: Capability) -> bool {
        self.capabilities(id)
            .is_some_and(|caps| caps.supports(capability))
    }

    /// Whether any registered provider offers `capability`
    pub fn has_capable(&self, capability: Capability) -> bool {
        self.providers
            .iter()
            .any(|p| p.capabilities().supports(capability))
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Iterate over registered adapters
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ProviderAdapter>> {
        self.providers.iter()
    }

    /// Get provider count
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.providers.len())
            .field("providers", &self.ids())
            .finish()
    }
}
