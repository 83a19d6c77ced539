//! Execution result and attempt budget types

use crate::core::providers::{ErrorKind, ProviderError, ProviderId};

/// Attempts allowed for one logical call: the chosen provider plus one fallback hop
pub const MAX_ATTEMPTS_PER_CALL: u32 = 2;

/// Remaining provider attempts for a request
///
/// Threaded through every layer that may dispatch on behalf of the same
/// request, so nested or repeated pipelines share one bound and always
/// terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    remaining: u32,
}

impl AttemptBudget {
    pub fn new(attempts: u32) -> Self {
        Self {
            remaining: attempts,
        }
    }

    /// Budget for one logical call
    pub fn per_call() -> Self {
        Self::new(MAX_ATTEMPTS_PER_CALL)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Take one attempt; `false` once the budget is spent
    pub fn consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self::per_call()
    }
}

/// Result of one logical call
///
/// `latency_ms` is the latency of the attempt that produced the outcome;
/// `attempts` counts provider attempts actually made.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T> {
    Success {
        value: T,
        provider: ProviderId,
        latency_ms: f64,
        attempts: u32,
    },
    Failure {
        error: ProviderError,
        provider: ProviderId,
        latency_ms: f64,
        attempts: u32,
    },
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    /// Provider that produced the outcome
    pub fn provider(&self) -> ProviderId {
        match self {
            OperationResult::Success { provider, .. } | OperationResult::Failure { provider, .. } => {
                *provider
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            OperationResult::Success { attempts, .. } | OperationResult::Failure { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn latency_ms(&self) -> f64 {
        match self {
            OperationResult::Success { latency_ms, .. }
            | OperationResult::Failure { latency_ms, .. } => *latency_ms,
        }
    }

    /// Failure classification, `None` on success
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            OperationResult::Success { .. } => None,
            OperationResult::Failure { error, .. } => Some(error.kind()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationResult<U> {
        match self {
            OperationResult::Success {
                value,
                provider,
                latency_ms,
                attempts,
            } => OperationResult::Success {
                value: f(value),
                provider,
                latency_ms,
                attempts,
            },
            OperationResult::Failure {
                error,
                provider,
                latency_ms,
                attempts,
            } => OperationResult::Failure {
                error,
                provider,
                latency_ms,
                attempts,
            },
        }
    }

    /// Drop the metadata
    pub fn into_result(self) -> Result<T, ProviderError> {
        match self {
            OperationResult::Success { value, .. } => Ok(value),
            OperationResult::Failure { error, .. } => Err(error),
        }
    }
}
