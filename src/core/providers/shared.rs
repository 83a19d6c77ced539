//! Shared HTTP plumbing for the network-backed adapters

use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::ProviderError;
use super::types::ProviderId;

/// Build a reqwest client with the adapter's request timeout
pub fn build_http_client(provider: ProviderId, timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .build()
        .map_err(|e| ProviderError::network(provider, format!("Failed to create HTTP client: {}", e)))
}

/// Map a transport-level reqwest error
pub fn map_send_error(provider: ProviderId, error: reqwest::Error, timeout: Duration) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout(provider, timeout.as_millis() as u64)
    } else {
        ProviderError::network(provider, error.to_string())
    }
}

/// Turn an HTTP response into JSON, mapping non-2xx statuses to errors
pub async fn read_json(provider: ProviderId, response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(provider = %provider, status = status.as_u16(), "upstream returned error status");
        return Err(ProviderError::from_http_status(provider, status.as_u16(), &body));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ProviderError::invalid_response(provider, format!("Response body is not JSON: {}", e)))
}

/// Treat blank credentials the same as missing ones
pub fn has_credential(key: &Option<String>) -> bool {
    key.as_deref().is_some_and(|k| !k.trim().is_empty())
}
