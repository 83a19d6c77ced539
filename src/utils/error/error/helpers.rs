//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            GatewayError::Provider(err) => err.http_status(),
            GatewayError::BadRequest(_) | GatewayError::Serialization(_) => 400,
            GatewayError::NotFound(_) => 404,
            GatewayError::HttpClient(_) => 502,
            GatewayError::Config(_)
            | GatewayError::Yaml(_)
            | GatewayError::Io(_)
            | GatewayError::Router(_)
            | GatewayError::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for the response body
    pub fn error_code(&self) -> &'static str {
        use crate::core::providers::ErrorKind;

        match self {
            GatewayError::Provider(err) => match err.kind() {
                ErrorKind::ProviderUnavailable => "PROVIDER_UNAVAILABLE",
                ErrorKind::InvalidResponse => "INVALID_RESPONSE",
                ErrorKind::Validation => "VALIDATION_ERROR",
                ErrorKind::RateLimited => "PROVIDER_RATE_LIMIT",
                ErrorKind::Timeout => "PROVIDER_TIMEOUT",
                ErrorKind::Network => "PROVIDER_NETWORK_ERROR",
                ErrorKind::Api => "PROVIDER_ERROR",
                ErrorKind::AssistantOffline => "ASSISTANT_OFFLINE",
                ErrorKind::BudgetExhausted => "ATTEMPT_BUDGET_EXHAUSTED",
            },
            GatewayError::BadRequest(_) | GatewayError::Serialization(_) => "BAD_REQUEST",
            GatewayError::NotFound(_) => "NOT_FOUND",
            GatewayError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            GatewayError::Config(_) | GatewayError::Yaml(_) | GatewayError::Router(_) => {
                "CONFIG_ERROR"
            }
            GatewayError::Io(_) | GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
