//! Unified provider error handling
//!
//! Single error type for every failure the router can observe, whether it
//! comes from an adapter, from response parsing, or from the router itself.
//!
//! | Variant | Kind | Triggers failover |
//! |------|------|--------|
//! | ProviderUnavailable | provider-unavailable | Yes |
//! | InvalidResponse | invalid-response | Yes |
//! | Validation | validation-error | No |
//! | RateLimited | rate-limited | Yes |
//! | Timeout | timeout | Yes |
//! | Network | network | Yes |
//! | Api | api | Yes |
//! | AssistantOffline | assistant-offline | No |
//! | BudgetExhausted | budget-exhausted | No |

use super::types::ProviderId;
use serde::{Deserialize, Serialize};

/// Classification of a failure, carried by `OperationResult::Failure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    ProviderUnavailable,
    InvalidResponse,
    #[serde(rename = "validation-error")]
    Validation,
    RateLimited,
    Timeout,
    Network,
    Api,
    AssistantOffline,
    BudgetExhausted,
}

fn provider_label(provider: &Option<ProviderId>) -> &'static str {
    provider.map(|p| p.as_str()).unwrap_or("router")
}

/// Unified provider error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider {} is unavailable: {message}", provider_label(.provider))]
    ProviderUnavailable {
        provider: Option<ProviderId>,
        message: String,
    },

    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        provider: ProviderId,
        message: String,
    },

    #[error("Validation error ({}): {message}", provider_label(.provider))]
    Validation {
        provider: Option<ProviderId>,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}")]
    RateLimited {
        provider: ProviderId,
        retry_after: Option<u64>,
    },

    #[error("Timeout for {provider} after {timeout_ms}ms")]
    Timeout { provider: ProviderId, timeout_ms: u64 },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: ProviderId,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    Api {
        provider: ProviderId,
        status: u16,
        message: String,
    },

    #[error("Shopping assistant is offline: {message}")]
    AssistantOffline { message: String },

    /// The caller's attempt budget was spent before this call could try anything
    #[error("Attempt budget exhausted before {operation}")]
    BudgetExhausted { operation: &'static str },
}

impl ProviderError {
    pub fn unavailable(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: Some(provider),
            message: message.into(),
        }
    }

    pub fn none_configured(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: None,
            message: message.into(),
        }
    }

    pub fn invalid_response(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider,
            message: message.into(),
        }
    }

    pub fn validation(provider: Option<ProviderId>, message: impl Into<String>) -> Self {
        Self::Validation {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limited(provider: ProviderId, retry_after: Option<u64>) -> Self {
        Self::RateLimited {
            provider,
            retry_after,
        }
    }

    pub fn timeout(provider: ProviderId, timeout_ms: u64) -> Self {
        Self::Timeout {
            provider,
            timeout_ms,
        }
    }

    pub fn network(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn api(provider: ProviderId, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn assistant_offline(message: impl Into<String>) -> Self {
        Self::AssistantOffline {
            message: message.into(),
        }
    }

    pub fn budget_exhausted(operation: &'static str) -> Self {
        Self::BudgetExhausted { operation }
    }

    /// Map an HTTP status from an upstream API to an error
    pub fn from_http_status(provider: ProviderId, status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::unavailable(provider, format!("Rejected credentials: {}", body)),
            429 => Self::rate_limited(provider, None),
            _ => Self::api(provider, status, body),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ProviderUnavailable { .. } => ErrorKind::ProviderUnavailable,
            Self::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Network { .. } => ErrorKind::Network,
            Self::Api { .. } => ErrorKind::Api,
            Self::AssistantOffline { .. } => ErrorKind::AssistantOffline,
            Self::BudgetExhausted { .. } => ErrorKind::BudgetExhausted,
        }
    }

    /// Provider the failure is attributed to, if any
    pub fn provider(&self) -> Option<ProviderId> {
        match self {
            Self::ProviderUnavailable { provider, .. } | Self::Validation { provider, .. } => {
                *provider
            }
            Self::InvalidResponse { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Network { provider, .. }
            | Self::Api { provider, .. } => Some(*provider),
            Self::AssistantOffline { .. } | Self::BudgetExhausted { .. } => None,
        }
    }

    /// Whether the invoker may try another provider after this failure
    ///
    /// Validation errors are a caller-input problem and never fail over.
    pub fn triggers_failover(&self) -> bool {
        !matches!(
            self,
            Self::Validation { .. } | Self::AssistantOffline { .. } | Self::BudgetExhausted { .. }
        )
    }

    /// HTTP status code for the thin API layer
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::RateLimited { .. } => 429,
            Self::ProviderUnavailable { .. }
            | Self::AssistantOffline { .. }
            | Self::BudgetExhausted { .. } => 503,
            Self::Timeout { .. } => 504,
            Self::InvalidResponse { .. } | Self::Network { .. } | Self::Api { .. } => 502,
        }
    }
}
