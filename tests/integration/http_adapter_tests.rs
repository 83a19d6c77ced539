//! HTTP adapters against a mock upstream

#[cfg(test)]
mod tests {
    use crate::common::assertions::OperationResultAssertions;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use storefront_ai::core::providers::{
        ChatTurn, ErrorKind, GeminiAdapter, GeminiConfig, OpenAiAdapter, OpenAiConfig, Operation,
        ProviderAdapter, ProviderId, ProviderRegistry,
    };
    use storefront_ai::core::router::{AiRouter, RoutingConfig};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chat() -> Operation {
        Operation::Chat {
            system: "You help shoppers.".to_string(),
            messages: vec![ChatTurn::user("any robots?")],
        }
    }

    fn openai(server: &MockServer) -> OpenAiAdapter {
        OpenAiAdapter::new(
            OpenAiConfig::default()
                .with_api_key("sk-test")
                .with_base_url(format!("{}/v1", server.uri())),
        )
        .unwrap()
    }

    fn gemini(server: &MockServer) -> GeminiAdapter {
        GeminiAdapter::new(
            GeminiConfig::default()
                .with_api_key("g-test")
                .with_base_url(format!("{}/v1beta", server.uri())),
        )
        .unwrap()
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    fn gemini_path() -> String {
        format!("/v1beta/models/{}:generateContent", GeminiConfig::default().model)
    }

    #[tokio::test]
    async fn test_openai_chat_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"messages": [{"role": "system"}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Meet Helper Robot.")))
            .expect(1)
            .mount(&server)
            .await;

        let reply = openai(&server).invoke(&chat()).await.unwrap();
        assert_eq!(reply, "Meet Helper Robot.");
    }

    #[tokio::test]
    async fn test_openai_status_mapping() {
        let cases = [
            (429, ErrorKind::RateLimited),
            (401, ErrorKind::ProviderUnavailable),
            (500, ErrorKind::Api),
        ];
        for (status, kind) in cases {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
                .mount(&server)
                .await;

            let err = openai(&server).invoke(&chat()).await.unwrap_err();
            assert_eq!(err.kind(), kind, "status {}", status);
            assert_eq!(err.provider(), Some(ProviderId::OpenAi));
        }
    }

    #[tokio::test]
    async fn test_openai_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = openai(&server).invoke(&chat()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    }

    #[tokio::test]
    async fn test_openai_without_key_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("hi")))
            .expect(0)
            .mount(&server)
            .await;

        let adapter = OpenAiAdapter::new(
            OpenAiConfig::default().with_base_url(format!("{}/v1", server.uri())),
        )
        .unwrap();
        assert!(!adapter.is_available().await);
        let err = adapter.invoke(&chat()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
    }

    #[tokio::test]
    async fn test_gemini_chat_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(gemini_path()))
            .and(query_param("key", "g-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{"text": "Helper "}, {"text": "Robot"}] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gemini(&server).invoke(&chat()).await.unwrap();
        assert_eq!(reply, "Helper Robot");
    }

    #[tokio::test]
    async fn test_router_fails_over_between_http_providers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(gemini_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{"text": "from gemini"}] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let registry = ProviderRegistry::new()
            .with(Arc::new(openai(&server)))
            .with(Arc::new(gemini(&server)));
        let router = AiRouter::new(registry, RoutingConfig::default()).unwrap();

        let result = router.execute(&chat()).await;
        result.assert_served_by(ProviderId::Gemini, 2);
        assert_eq!(result.into_result().unwrap(), "from gemini");
        assert_eq!(router.health(ProviderId::OpenAi).unwrap().consecutive_errors, 1);
    }

    #[tokio::test]
    async fn test_slow_upstream_hits_attempt_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("too late"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let registry = ProviderRegistry::new().with(Arc::new(openai(&server)));
        let config = RoutingConfig::new(ProviderId::OpenAi, vec![]).with_attempt_timeout_ms(50);
        let router = AiRouter::new(registry, config).unwrap();

        let result = router.execute(&chat()).await;
        result.assert_failed_with(ErrorKind::Timeout);
        assert_eq!(result.attempts(), 1);
        assert_eq!(router.usage(ProviderId::OpenAi).unwrap().errors_today, 1);
    }
}
