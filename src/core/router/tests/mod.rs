//! Router tests module
//!
//! Scripted in-memory adapters drive the router without any network.


use crate::core::providers::{
    Capabilities, Operation, ProviderAdapter, ProviderError, ProviderId, ProviderRegistry,
};
use crate::core::router::{AiRouter, RoutingConfig};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Adapter that replays scripted outcomes, then repeats its default
#[derive(Debug)]
pub(crate) struct ScriptedAdapter {
    id: ProviderId,
    capabilities: Capabilities,
    available: AtomicBool,
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    default: Result<String, ProviderError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedAdapter {
    pub(crate) fn ok(id: ProviderId, reply: &str) -> Self {
        Self {
            id,
            capabilities: Capabilities::TEXT_ONLY,
            available: AtomicBool::new(true),
            script: Mutex::new(VecDeque::new()),
            default: Ok(reply.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(id: ProviderId) -> Self {
        Self {
            default: Err(ProviderError::api(id, 500, "scripted failure")),
            ..Self::ok(id, "")
        }
    }

    pub(crate) fn with_script(self, outcomes: Vec<Result<String, ProviderError>>) -> Self {
        *self.script.lock() = outcomes.into();
        self
    }

    pub(crate) fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn unavailable(self) -> Self {
        self.available.store(false, Ordering::SeqCst);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedAdapter {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn invoke(&self, _operation: &Operation) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.script.lock().pop_front();
        next.unwrap_or_else(|| self.default.clone())
    }
}

pub(crate) fn chat_operation() -> Operation {
    Operation::Chat {
        system: "You are a shopping assistant.".to_string(),
        messages: vec![crate::core::providers::ChatTurn::user("hello")],
    }
}

/// Router over the given adapters with the default chain and no cooldown
pub(crate) fn router_with(adapters: Vec<Arc<ScriptedAdapter>>) -> AiRouter {
    router_with_config(adapters, RoutingConfig::default().with_failover_cooldown_ms(0))
}

pub(crate) fn router_with_config(
    adapters: Vec<Arc<ScriptedAdapter>>,
    config: RoutingConfig,
) -> AiRouter {
    let mut registry = ProviderRegistry::new();
    for adapter in adapters {
        registry.register(adapter);
    }
    AiRouter::new(registry, config).unwrap()
}
