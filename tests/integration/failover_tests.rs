//! Failover and health accounting through the public router API

#[cfg(test)]
mod tests {
    use crate::common::assertions::OperationResultAssertions;
    use crate::common::providers::registry;
    use crate::common::{ScriptedProvider, product_json};
    use std::sync::Arc;
    use std::time::Duration;
    use storefront_ai::core::providers::{ChatTurn, ErrorKind, Operation, ProviderError, ProviderId};
    use storefront_ai::core::router::{AiRouter, AttemptBudget, RoutingConfig, SystemHealth};
    use storefront_ai::core::matcher::Catalog;
    use storefront_ai::{Config, Storefront};

    fn chat() -> Operation {
        Operation::Chat {
            system: "You help shoppers.".to_string(),
            messages: vec![ChatTurn::user("show me headsets")],
        }
    }

    fn no_cooldown() -> RoutingConfig {
        RoutingConfig::default().with_failover_cooldown_ms(0)
    }

    /// Primary fails, the fallback answers, both health records move by one
    #[tokio::test]
    async fn test_single_hop_failover_updates_both_providers() {
        let openai = Arc::new(ScriptedProvider::failing(ProviderId::OpenAi));
        let gemini = Arc::new(
            ScriptedProvider::replying(ProviderId::Gemini, "fallback answer")
                .then(Err(ProviderError::api(ProviderId::Gemini, 502, "bad gateway"))),
        );
        let router =
            AiRouter::new(registry(&[openai.clone(), gemini.clone()]), no_cooldown()).unwrap();

        // Seed: both fail once
        router.execute(&chat()).await.assert_failed_with(ErrorKind::Api);
        let openai_before = router.health(ProviderId::OpenAi).unwrap().consecutive_errors;
        let gemini_before = router.health(ProviderId::Gemini).unwrap().consecutive_errors;
        assert_eq!((openai_before, gemini_before), (1, 1));

        let result = router.execute(&chat()).await;
        result.assert_served_by(ProviderId::Gemini, 2);

        let openai_after = router.health(ProviderId::OpenAi).unwrap();
        let gemini_after = router.health(ProviderId::Gemini).unwrap();
        assert_eq!(openai_after.consecutive_errors, openai_before + 1);
        assert_eq!(gemini_after.consecutive_errors, gemini_before - 1);

        let openai_usage = router.usage(ProviderId::OpenAi).unwrap();
        assert_eq!(openai_usage.requests_today, 2);
        assert_eq!(openai_usage.errors_today, 2);
        assert_eq!(router.usage(ProviderId::Gemini).unwrap().errors_today, 1);
    }

    #[tokio::test]
    async fn test_demoted_primary_is_skipped() {
        let openai = Arc::new(ScriptedProvider::failing(ProviderId::OpenAi));
        let gemini = Arc::new(ScriptedProvider::replying(ProviderId::Gemini, "ok"));
        let router =
            AiRouter::new(registry(&[openai.clone(), gemini.clone()]), no_cooldown()).unwrap();

        for _ in 0..3 {
            router.execute(&chat()).await.assert_served_by(ProviderId::Gemini, 2);
        }
        assert_eq!(router.health(ProviderId::OpenAi).unwrap().consecutive_errors, 3);

        // Demoted: the next call goes straight to the fallback
        router.execute(&chat()).await.assert_served_by(ProviderId::Gemini, 1);
        assert_eq!(openai.calls(), 3);
        assert_eq!(router.system_status().active_provider, ProviderId::Gemini);
    }

    #[tokio::test]
    async fn test_never_more_than_two_attempts() {
        let providers = [
            Arc::new(ScriptedProvider::failing(ProviderId::OpenAi)),
            Arc::new(ScriptedProvider::failing(ProviderId::Gemini)),
            Arc::new(ScriptedProvider::failing(ProviderId::ClientSide)),
        ];
        let router = AiRouter::new(registry(&providers), no_cooldown()).unwrap();

        let result = router.execute(&chat()).await;
        assert_eq!(result.attempts(), 2);
        assert_eq!(result.provider(), ProviderId::Gemini);
        assert_eq!(providers[2].calls(), 0);
    }

    #[tokio::test]
    async fn test_shared_budget_spans_operations() {
        let openai = Arc::new(ScriptedProvider::failing(ProviderId::OpenAi));
        let gemini = Arc::new(ScriptedProvider::failing(ProviderId::Gemini));
        let router = AiRouter::new(registry(&[openai.clone(), gemini.clone()]), no_cooldown())
            .unwrap();

        let mut budget = AttemptBudget::per_call();
        router.execute_with_budget(&chat(), &mut budget).await;
        assert!(budget.is_exhausted());

        // A retry with the same budget makes no attempt
        let retry = router.execute_with_budget(&chat(), &mut budget).await;
        assert_eq!(retry.attempts(), 0);
        assert_eq!(openai.calls() + gemini.calls(), 2);
    }

    #[tokio::test]
    async fn test_attempt_timeout_counts_as_failure() {
        let openai = Arc::new(
            ScriptedProvider::replying(ProviderId::OpenAi, "late").slow(Duration::from_millis(300)),
        );
        let gemini = Arc::new(ScriptedProvider::replying(ProviderId::Gemini, "on time"));
        let config = no_cooldown().with_attempt_timeout_ms(50);
        let router = AiRouter::new(registry(&[openai, gemini]), config).unwrap();

        let result = router.execute(&chat()).await;
        result.assert_served_by(ProviderId::Gemini, 2);

        let health = router.health(ProviderId::OpenAi).unwrap();
        assert_eq!(health.consecutive_errors, 1);
        assert!(health.last_response_time_ms >= 50.0);
    }

    #[tokio::test]
    async fn test_cooldown_keeps_primary_under_errors() {
        let openai = Arc::new(ScriptedProvider::failing(ProviderId::OpenAi));
        let gemini = Arc::new(ScriptedProvider::replying(ProviderId::Gemini, "ok"));
        let config = RoutingConfig::default().with_failover_cooldown_ms(60_000);
        let router = AiRouter::new(registry(&[openai.clone(), gemini.clone()]), config).unwrap();

        router.execute(&chat()).await.assert_served_by(ProviderId::Gemini, 2);

        // Within the cooldown the fallback is not selected again
        let second = router.execute(&chat()).await;
        second.assert_failed_with(ErrorKind::Api);
        assert_eq!(second.provider(), ProviderId::OpenAi);
        assert_eq!(gemini.calls(), 1);
    }

    #[tokio::test]
    async fn test_status_critical_iff_no_provider_available() {
        let providers = [
            Arc::new(ScriptedProvider::replying(ProviderId::OpenAi, "ok").offline()),
            Arc::new(ScriptedProvider::replying(ProviderId::Gemini, "ok").offline()),
        ];
        let router = Arc::new(AiRouter::new(registry(&providers), no_cooldown()).unwrap());
        assert_eq!(router.system_status().system_health, SystemHealth::Healthy);

        let available = router.probe_availability().await;
        assert!(available.is_empty());
        let status = router.system_status();
        assert_eq!(status.system_health, SystemHealth::Critical);
        assert!(status.available_providers.is_empty());

        // The degraded primary is still tried once
        let result = router.execute(&chat()).await;
        result.assert_served_by(ProviderId::OpenAi, 1);
        assert_eq!(providers[1].calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_product_fails_over_through_storefront() {
        let openai = Arc::new(ScriptedProvider::replying(ProviderId::OpenAi, "Sure! Here it is"));
        let gemini = Arc::new(ScriptedProvider::replying(
            ProviderId::Gemini,
            product_json("Sun Lamp", 249.5, "Energy Systems", 8),
        ));
        let router =
            Arc::new(AiRouter::new(registry(&[openai, gemini]), no_cooldown()).unwrap());
        let storefront = Storefront::from_parts(Config::default(), router.clone(), Catalog::default());

        let product = storefront
            .assistant()
            .generate_product("a lamp that follows the sun")
            .await
            .unwrap();
        assert_eq!(product.name, "Sun Lamp");
        assert_eq!(router.health(ProviderId::OpenAi).unwrap().consecutive_errors, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_calls_keep_counters_consistent() {
        let openai = Arc::new(ScriptedProvider::replying(ProviderId::OpenAi, "ok"));
        let gemini = Arc::new(ScriptedProvider::replying(ProviderId::Gemini, "ok"));
        let router = Arc::new(
            AiRouter::new(registry(&[openai.clone(), gemini.clone()]), no_cooldown()).unwrap(),
        );

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let router = router.clone();
                tokio::spawn(async move { router.execute(&chat()).await.is_success() })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap());
        }

        let usage = router.usage(ProviderId::OpenAi).unwrap();
        assert_eq!(usage.requests_today, 64);
        assert_eq!(usage.errors_today, 0);
        assert_eq!(openai.calls(), 64);
        assert_eq!(gemini.calls(), 0);
    }
}
