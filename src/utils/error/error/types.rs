//! Error types for the service

use crate::core::providers::ProviderError;
use crate::core::router::RouterError;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for configuration, startup and the HTTP layer
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Routing configuration rejected
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Failure surfaced by the router or the assistant
    #[error("{0}")]
    Provider(ProviderError),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
