//! Gemini adapter
//!
//! Text-only: images would need the file upload API, so this adapter does not
//! advertise the multimodal capability.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::GeminiConfig;
use crate::core::providers::adapter::ProviderAdapter;
use crate::core::providers::error::ProviderError;
use crate::core::providers::shared::{build_http_client, has_credential, map_send_error, read_json};
use crate::core::providers::types::{Capabilities, ChatRole, Operation, ProviderId};

const ID: ProviderId = ProviderId::Gemini;

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiAdapter {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = build_http_client(ID, config.request_timeout())?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn build_request(&self, operation: &Operation) -> Result<Value, ProviderError> {
        match operation {
            Operation::GenerateProduct { prompt } => Ok(json!({
                "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "temperature": 0.8,
                },
            })),
            Operation::Chat { system, messages } => {
                let contents: Vec<Value> = messages
                    .iter()
                    .map(|turn| {
                        let role = match turn.role {
                            ChatRole::User => "user",
                            ChatRole::Assistant => "model",
                        };
                        json!({ "role": role, "parts": [{ "text": turn.content }] })
                    })
                    .collect();
                Ok(json!({
                    "systemInstruction": { "parts": [{ "text": system }] },
                    "contents": contents,
                }))
            }
            Operation::AnalyzeImage { .. } => Err(ProviderError::unavailable(
                ID,
                "image analysis is not supported by this adapter",
            )),
        }
    }
}

/// Concatenate the text parts of the first candidate
pub(crate) fn extract_text(body: &Value) -> Result<String, ProviderError> {
    let parts = body
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::invalid_response(ID, "Missing candidates[0].content.parts"))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(ProviderError::invalid_response(ID, "Candidate contained no text"));
    }
    Ok(text)
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn id(&self) -> ProviderId {
        ID
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TEXT_ONLY
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
            .ok_or_else(|| ProviderError::unavailable(ID, "GEMINI_API_KEY is not configured"))?;

        let body = self.build_request(operation)?;
        let url = self.config.get_endpoint("generateContent");
        debug!(provider = %ID, operation = operation.name(), url = %url, "sending request");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(ID, e, self.config.request_timeout()))?;

        let body = read_json(ID, response).await?;
        extract_text(&body)
    }
}
