//! Provider identity, capabilities and the operations routed to providers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of an upstream AI provider
///
/// The set is closed: every provider the router can dispatch to has a tag here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderId {
    /// OpenAI-compatible chat completions API
    #[serde(rename = "openai")]
    OpenAi,
    /// Google Gemini generateContent API
    Gemini,
    /// Local rule-based responder, no network involved
    ClientSide,
}

impl ProviderId {
    /// All known providers in declaration order
    pub const ALL: [ProviderId; 3] = [ProviderId::OpenAi, ProviderId::Gemini, ProviderId::ClientSide];

    /// Stable string tag used in logs, config and status payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Gemini => "gemini",
            ProviderId::ClientSide => "client-side",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderId::OpenAi),
            "gemini" => Ok(ProviderId::Gemini),
            "client-side" | "client_side" | "client" => Ok(ProviderId::ClientSide),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// A single capability a provider may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    TextGeneration,
    Multimodal,
}

/// Capability flags of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub text_generation: bool,
    pub multimodal: bool,
}

impl Capabilities {
    pub const TEXT_ONLY: Capabilities = Capabilities {
        text_generation: true,
        multimodal: false,
    };

    pub const TEXT_AND_MULTIMODAL: Capabilities = Capabilities {
        text_generation: true,
        multimodal: true,
    };

    /// Check whether the flag for `capability` is set
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::TextGeneration => self.text_generation,
            Capability::Multimodal => self.multimodal,
        }
    }
}

/// Role of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a shopping conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A logical operation dispatched to exactly one provider per attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Ask for a single product as a JSON object
    GenerateProduct { prompt: String },
    /// Continue a shopping conversation
    Chat {
        system: String,
        messages: Vec<ChatTurn>,
    },
    /// Answer a question about a product image
    AnalyzeImage { prompt: String, image_url: String },
}

impl Operation {
    /// Capability a provider must have to serve this operation
    pub fn required_capability(&self) -> Capability {
        match self {
            Operation::GenerateProduct { .. } | Operation::Chat { .. } => {
                Capability::TextGeneration
            }
            Operation::AnalyzeImage { .. } => Capability::Multimodal,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GenerateProduct { .. } => "generate_product",
            Operation::Chat { .. } => "chat",
            Operation::AnalyzeImage { .. } => "analyze_image",
        }
    }
}
