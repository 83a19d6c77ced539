//! Provider test utilities

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use storefront_ai::core::providers::{
    Capabilities, Operation, ProviderAdapter, ProviderError, ProviderId, ProviderRegistry,
};

/// Provider that replays scripted outcomes, then repeats its default
#[derive(Debug)]
pub struct ScriptedProvider {
    id: ProviderId,
    capabilities: Capabilities,
    available: AtomicBool,
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    default: Result<String, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_operation: Mutex<Option<Operation>>,
}

impl ScriptedProvider {
    pub fn replying(id: ProviderId, reply: impl Into<String>) -> Self {
        Self {
            id,
            capabilities: Capabilities::TEXT_ONLY,
            available: AtomicBool::new(true),
            script: Mutex::new(VecDeque::new()),
            default: Ok(reply.into()),
            delay: None,
            calls: AtomicUsize::new(0),
            last_operation: Mutex::new(None),
        }
    }

    pub fn failing(id: ProviderId) -> Self {
        Self {
            default: Err(ProviderError::api(id, 500, "upstream exploded")),
            ..Self::replying(id, "")
        }
    }

    pub fn then(self, outcome: Result<&str, ProviderError>) -> Self {
        self.script.lock().push_back(outcome.map(str::to_string));
        self
    }

    pub fn multimodal(mut self) -> Self {
        self.capabilities = Capabilities::TEXT_AND_MULTIMODAL;
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn offline(self) -> Self {
        self.available.store(false, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_operation(&self) -> Option<Operation> {
        self.last_operation.lock().clone()
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn invoke(&self, operation: &Operation) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_operation.lock() = Some(operation.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.script.lock().pop_front();
        next.unwrap_or_else(|| self.default.clone())
    }
}

/// Registry over the given providers, in order
pub fn registry(providers: &[Arc<ScriptedProvider>]) -> ProviderRegistry {
    providers
        .iter()
        .fold(ProviderRegistry::new(), |registry, provider| {
            registry.with(provider.clone())
        })
}
