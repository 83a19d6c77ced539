//! HTTP route modules

pub mod ai;
pub mod health;

use crate::utils::error::GatewayError;
use actix_web::web;
use tracing::debug;

/// Largest accepted JSON body; image data URLs dominate
const MAX_JSON_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// JSON extractor settings: malformed bodies become 400 with the standard error body
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            debug!(error = %err, "Rejected request body");
            GatewayError::bad_request(err.to_string()).into()
        })
}
