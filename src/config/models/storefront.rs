//! Main service configuration

use super::*;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// Main service configuration, the root of the YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub routing: RoutingSection,
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// JSON catalog used for recommendations
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Apply environment overrides on top of the loaded values
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| env::var(key).ok())
    }

    /// Apply overrides from any variable source
    pub(crate) fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get("OPENAI_API_KEY") {
            debug!("OpenAI API key taken from environment");
            self.providers.openai.settings.api_key = Some(key);
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            self.providers.openai.settings.base_url = url;
        }
        if let Some(model) = get("OPENAI_MODEL") {
            self.providers.openai.settings.model = model;
        }
        if let Some(key) = get("GEMINI_API_KEY") {
            debug!("Gemini API key taken from environment");
            self.providers.gemini.settings.api_key = Some(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.providers.gemini.settings.model = model;
        }
        if let Some(host) = get("STOREFRONT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("STOREFRONT_PORT") {
            self.server.port = port.trim().parse().map_err(|e| {
                GatewayError::Config(format!("Invalid STOREFRONT_PORT '{}': {}", port, e))
            })?;
        }
        Ok(())
    }
}
