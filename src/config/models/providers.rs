//! Provider configuration

use super::default_true;
use crate::core::providers::{GeminiConfig, OpenAiConfig};
use serde::{Deserialize, Serialize};

/// Settings for every provider the service knows about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiProviderConfig,
    #[serde(default)]
    pub gemini: GeminiProviderConfig,
    #[serde(default)]
    pub client_side: ClientSideProviderConfig,
}

/// OpenAI provider entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiProviderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: OpenAiConfig,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: OpenAiConfig::default(),
        }
    }
}

/// Gemini provider entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiProviderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: GeminiConfig,
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: GeminiConfig::default(),
        }
    }
}

/// Local responder entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSideProviderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ClientSideProviderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
