//! Core functionality for the storefront AI service
//!
//! This module contains the routing engine, the recommendation matcher, the
//! provider adapters and the assistant operations built on top of them.

pub mod assistant;
pub mod matcher;
pub mod providers;
pub mod router;

use crate::config::Config;
use crate::utils::error::Result;
use assistant::Assistant;
use matcher::Catalog;
use providers::{ClientSideAdapter, GeminiAdapter, OpenAiAdapter, ProviderRegistry};
use router::{AiRouter, SystemHealth};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Main service struct that wires configuration, router, catalog and assistant
#[derive(Debug, Clone)]
pub struct Storefront {
    config: Arc<Config>,
    router: Arc<AiRouter>,
    assistant: Assistant,
}

impl Storefront {
    /// Create a new instance from configuration
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing storefront AI service");

        let config = Arc::new(config);

        debug!("Registering providers");
        let registry = build_registry(&config)?;

        debug!("Initializing router");
        let router = Arc::new(AiRouter::new(
            registry,
            config.storefront.routing.policy.clone(),
        )?);

        debug!(path = %config.storefront.catalog_path, "Loading catalog");
        let catalog = load_catalog(&config.storefront.catalog_path)?;

        let assistant = Assistant::new(router.clone(), Arc::new(catalog));

        info!("Storefront AI service initialized successfully");
        Ok(Self {
            config,
            router,
            assistant,
        })
    }

    /// Build from already constructed parts
    pub fn from_parts(config: Config, router: Arc<AiRouter>, catalog: Catalog) -> Self {
        let assistant = Assistant::new(router.clone(), Arc::new(catalog));
        Self {
            config: Arc::new(config),
            router,
            assistant,
        }
    }

    /// Run an initial availability probe and start the periodic one
    pub async fn start_background_services(&self) -> Option<JoinHandle<()>> {
        debug!("Starting background services");

        let available = self.router.probe_availability().await;
        info!(available = ?available, "Initial provider probe finished");

        self.config
            .storefront
            .routing
            .probe_interval()
            .map(|every| self.router.clone().spawn_health_probe(every))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Arc<AiRouter> {
        &self.router
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Health check
    pub fn health_check(&self) -> HealthStatus {
        health_report(&self.router, self.assistant.catalog())
    }
}

/// Register every enabled provider, in primary-then-fallback order
fn build_registry(config: &Config) -> Result<ProviderRegistry> {
    let providers = &config.storefront.providers;
    let mut registry = ProviderRegistry::new();

    if providers.openai.enabled {
        registry.register(Arc::new(OpenAiAdapter::new(
            providers.openai.settings.clone(),
        )?));
    }
    if providers.gemini.enabled {
        registry.register(Arc::new(GeminiAdapter::new(
            providers.gemini.settings.clone(),
        )?));
    }
    if providers.client_side.enabled {
        registry.register(Arc::new(ClientSideAdapter::new()));
    }

    if registry.is_empty() {
        warn!("No providers enabled, every AI operation will fail");
    }
    Ok(registry)
}

/// Load the catalog, an absent file yields an empty catalog
fn load_catalog(path: &str) -> Result<Catalog> {
    if Path::new(path).exists() {
        Catalog::from_file(path)
    } else {
        warn!(path, "Catalog file not found, recommendations disabled");
        Ok(Catalog::default())
    }
}

/// Component health of the router and the catalog
pub fn health_report(router: &AiRouter, catalog: &Catalog) -> HealthStatus {
    let system = router.system_status();
    let status = match system.system_health {
        SystemHealth::Healthy => "healthy",
        SystemHealth::Degraded => "degraded",
        SystemHealth::Critical => "unhealthy",
    };

    let mut components = std::collections::HashMap::new();
    components.insert(
        "router".to_string(),
        ComponentHealth {
            status: status.to_string(),
            message: Some(format!(
                "{} of {} providers available, active: {}",
                system.available_providers.len(),
                system.per_provider_status.len(),
                system.active_provider
            )),
        },
    );
    components.insert(
        "catalog".to_string(),
        ComponentHealth {
            status: if catalog.is_empty() { "empty" } else { "healthy" }.to_string(),
            message: Some(format!("{} items", catalog.len())),
        },
    );

    HealthStatus {
        status: status.to_string(),
        timestamp: chrono::Utc::now(),
        components,
    }
}

/// Health status response
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    /// Overall system status
    pub status: String,
    /// Timestamp when health was checked
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Health status of individual components
    pub components: std::collections::HashMap<String, ComponentHealth>,
}

/// Component health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct ComponentHealth {
    /// Component status
    pub status: String,
    /// Optional status message
    pub message: Option<String>,
}
