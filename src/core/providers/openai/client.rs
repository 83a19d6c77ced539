//! OpenAI-compatible adapter

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::OpenAiConfig;
use crate::core::providers::adapter::ProviderAdapter;
use crate::core::providers::error::ProviderError;
use crate::core::providers::shared::{build_http_client, has_credential, map_send_error, read_json};
use crate::core::providers::types::{Capabilities, ChatRole, Operation, ProviderId};

const ID: ProviderId = ProviderId::OpenAi;

const JSON_ONLY_SYSTEM: &str =
    "You generate storefront product listings. Reply with one JSON object and nothing else.";

/// Adapter for `/chat/completions` style endpoints
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    config: OpenAiConfig,
    http_client: Client,
}

impl OpenAiAdapter {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let http_client = build_http_client(ID, config.request_timeout())?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Translate an operation into a chat completions request body
    pub(crate) fn build_request(&self, operation: &Operation) -> Value {
        match operation {
            Operation::GenerateProduct { prompt } => json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": JSON_ONLY_SYSTEM },
                    { "role": "user", "content": prompt },
                ],
                "response_format": { "type": "json_object" },
                "temperature": 0.8,
            }),
            Operation::Chat { system, messages } => {
                let mut wire = vec![json!({ "role": "system", "content": system })];
                wire.extend(messages.iter().map(|turn| {
                    let role = match turn.role {
                        ChatRole::User => "user",
                        ChatRole::Assistant => "assistant",
                    };
                    json!({ "role": role, "content": turn.content })
                }));
                json!({
                    "model": self.config.model,
                    "messages": wire,
                    "temperature": 0.7,
                })
            }
            Operation::AnalyzeImage { prompt, image_url } => json!({
                "model": self.config.model,
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": prompt },
                        { "type": "image_url", "image_url": { "url": image_url } },
                    ],
                }],
            }),
        }
    }
}

/// Pull `choices[0].message.content` out of a completion
pub(crate) fn extract_content(body: &Value) -> Result<String, ProviderError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::invalid_response(ID, "Missing choices[0].message.content"))
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn id(&self) -> ProviderId {
        ID
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TEXT_AND_MULTIMODAL
    }

    async fn is_available(&self) -> bool {
        has_credential(&self.config.api_key)
    }

    async fn invoke(&self, operation: &Operation) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::unavailable(ID, "OPENAI_API_KEY is not configured"))?;

        let url = self.config.chat_completions_url();
        debug!(provider = %ID, operation = operation.name(), url = %url, "sending request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.build_request(operation))
            .send()
            .await
            .map_err(|e| map_send_error(ID, e, self.config.request_timeout()))?;

        let body = read_json(ID, response).await?;
        extract_content(&body)
    }
}
