//! Failover execution for AiRouter
//!
//! # Flow
//!
//! 1. Exclude providers that are not registered or cannot serve the operation
//! 2. Choose a provider; stop if selection can only offer an excluded one
//! 3. Spend one attempt from the budget and invoke under the attempt timeout
//! 4. Record the attempt, then return on success
//! 5. On a failover-eligible failure exclude the provider and go back to 2
//!
//! The budget bounds the loop: a logical call makes at most two attempts,
//! and callers that run several pipelines for one request share the same
//! budget.

use super::fallback::{AttemptBudget, OperationResult};
use super::router::AiRouter;
use crate::core::providers::{Operation, ProviderError, ProviderId};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info, warn};

impl AiRouter {
    /// Execute an operation with a fresh per-call budget
    pub async fn execute(&self, operation: &Operation) -> OperationResult<String> {
        let mut budget = AttemptBudget::per_call();
        self.execute_with_budget(operation, &mut budget).await
    }

    /// Execute an operation, spending attempts from a caller-owned budget
    pub async fn execute_with_budget(
        &self,
        operation: &Operation,
        budget: &mut AttemptBudget,
    ) -> OperationResult<String> {
        self.execute_parsed(operation, budget, |_, raw| Ok(raw.to_string()))
            .await
    }

    /// Execute an operation and parse the raw provider output
    ///
    /// A parse error counts as a failed attempt for the provider that produced
    /// the output. Parse errors that do not trigger failover (validation)
    /// end the call immediately.
    pub async fn execute_parsed<T, P>(
        &self,
        operation: &Operation,
        budget: &mut AttemptBudget,
        parse: P,
    ) -> OperationResult<T>
    where
        P: Fn(ProviderId, &str) -> Result<T, ProviderError>,
    {
        let config = self.config();
        let capability = operation.required_capability();

        let mut excluding: HashSet<ProviderId> = config
            .ordered_providers()
            .into_iter()
            .filter(|provider| !self.registry.supports(*provider, capability))
            .collect();

        let mut attempts = 0u32;
        let mut last_failure: Option<(ProviderError, ProviderId, f64)> = None;

        while !budget.is_exhausted() {
            let selection = self.tracker.choose(&config, &excluding);
            let provider = selection.provider;

            if excluding.contains(&provider) {
                debug!(
                    provider = %provider,
                    operation = operation.name(),
                    "no eligible provider left"
                );
                break;
            }

            let Some(adapter) = self.registry.get(provider) else {
                break;
            };

            budget.consume();
            attempts += 1;

            if selection.is_failover {
                info!(
                    provider = %provider,
                    primary = %config.primary,
                    operation = operation.name(),
                    "failing over to fallback provider"
                );
            }

            let start = Instant::now();
            let outcome =
                match tokio::time::timeout(config.attempt_timeout(), adapter.invoke(operation))
                    .await
                {
                    Ok(Ok(raw)) => parse(provider, &raw),
                    Ok(Err(error)) => Err(error),
                    Err(_) => Err(ProviderError::timeout(provider, config.attempt_timeout_ms)),
                };
            let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

            self.tracker.record(provider, latency_ms, outcome.is_ok());

            match outcome {
                Ok(value) => {
                    debug!(
                        provider = %provider,
                        operation = operation.name(),
                        attempts,
                        latency_ms,
                        "operation succeeded"
                    );
                    return OperationResult::Success {
                        value,
                        provider,
                        latency_ms,
                        attempts,
                    };
                }
                Err(error) => {
                    warn!(
                        provider = %provider,
                        operation = operation.name(),
                        kind = ?error.kind(),
                        attempt = attempts,
                        latency_ms,
                        error = %error,
                        "provider attempt failed"
                    );

                    let failover = error.triggers_failover();
                    excluding.insert(provider);
                    last_failure = Some((error, provider, latency_ms));

                    if !failover {
                        break;
                    }
                }
            }
        }

        match last_failure {
            Some((error, provider, latency_ms)) => OperationResult::Failure {
                error,
                provider,
                latency_ms,
                attempts,
            },
            None if attempts == 0 && budget.is_exhausted() => {
                warn!(
                    operation = operation.name(),
                    "attempt budget already spent, nothing tried"
                );
                OperationResult::Failure {
                    error: ProviderError::budget_exhausted(operation.name()),
                    provider: config.primary,
                    latency_ms: 0.0,
                    attempts,
                }
            }
            None => {
                warn!(
                    operation = operation.name(),
                    "no registered provider can serve the operation"
                );
                OperationResult::Failure {
                    error: ProviderError::none_configured(format!(
                        "no available provider supports {}",
                        operation.name()
                    )),
                    provider: config.primary,
                    latency_ms: 0.0,
                    attempts,
                }
            }
        }
    }
}
