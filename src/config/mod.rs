//! Configuration management for the storefront AI service
//!
//! Configuration is read from a YAML file, then environment variables are
//! applied on top, then the result is validated. Every section has defaults,
//! so an empty file (or none at all) yields a runnable service.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/storefront.yaml";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub storefront: StorefrontConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let storefront: StorefrontConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { storefront })
    }

    /// Load file (if present) plus environment overrides
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_file(path).await?
        } else {
            warn!("Config file {:?} not found, using defaults", path);
            Self::default()
        };

        config.storefront.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.storefront.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.storefront.server
    }

    /// Get routing configuration
    pub fn routing(&self) -> &RoutingSection {
        &self.storefront.routing
    }

    /// Get providers configuration
    pub fn providers(&self) -> &ProvidersConfig {
        &self.storefront.providers
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.storefront.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.storefront
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.storefront
            .routing
            .policy
            .validate()
            .map_err(|e| GatewayError::Config(format!("Routing config error: {}", e)))?;

        if self.storefront.catalog_path.trim().is_empty() {
            return Err(GatewayError::Config("catalog_path cannot be empty".to_string()));
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.storefront)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
