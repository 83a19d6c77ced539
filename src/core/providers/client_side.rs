//! Local rule-based responder
//!
//! Keeps the storefront answering when every network provider is down. Output
//! follows the same wire shapes as the remote providers so the assistant's
//! parsers treat it like any other upstream.

use async_trait::async_trait;
use serde_json::json;

use super::adapter::ProviderAdapter;
use super::error::ProviderError;
use super::types::{Capabilities, ChatRole, ChatTurn, Operation, ProviderId};

const ID: ProviderId = ProviderId::ClientSide;

/// Line prefix the product prompt uses for the raw idea text
pub const IDEA_PREFIX: &str = "Idea:";

/// Category guesses, first match wins
const CATEGORY_HINTS: &[(&str, &str)] = &[
    ("neural", "Neural Tech"),
    ("brain", "Neural Tech"),
    ("quantum", "Quantum Computing"),
    ("cyber", "Cybernetics"),
    ("implant", "Cybernetics"),
    ("bio", "Biotech"),
    ("holo", "Holographic Systems"),
    ("space", "Space Tech"),
    ("orbit", "Space Tech"),
    ("vr", "AR/VR"),
    ("reality", "AR/VR"),
    ("robot", "Robotics"),
    ("drone", "Robotics"),
    ("energy", "Energy Systems"),
    ("battery", "Energy Systems"),
    ("solar", "Energy Systems"),
];

#[derive(Debug, Clone, Default)]
pub struct ClientSideAdapter;

impl ClientSideAdapter {
    pub fn new() -> Self {
        Self
    }

    fn generate_product(&self, prompt: &str) -> String {
        let idea = prompt
            .lines()
            .find_map(|line| line.trim().strip_prefix(IDEA_PREFIX))
            .unwrap_or(prompt)
            .trim();
        let lowered = idea.to_lowercase();

        let category = CATEGORY_HINTS
            .iter()
            .find(|(hint, _)| lowered.contains(hint))
            .map(|(_, category)| *category)
            .unwrap_or("Smart Materials");

        let name = title_case(idea.split_whitespace().take(4).collect::<Vec<_>>().join(" "));
        let name = if name.is_empty() {
            "Adaptive Smart Gadget".to_string()
        } else {
            name
        };

        let mut tags: Vec<String> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.len() > 3)
            .take(4)
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            tags.push("futuristic".to_string());
        }

        json!({
            "name": name,
            "description": format!("{} Designed for everyday use in the near future.", sentence_case(idea)),
            "price": 499.99,
            "category": category,
            "stock": 10,
            "tags": tags,
        })
        .to_string()
    }

    fn chat_reply(&self, messages: &[ChatTurn]) -> String {
        let last_user = messages
            .iter()
            .rev()
            .find(|turn| turn.role == ChatRole::User)
            .map(|turn| turn.content.trim())
            .unwrap_or_default();

        if last_user.is_empty() {
            "Hi! Tell me what you are shopping for and I will point you at matching products."
                .to_string()
        } else {
            format!(
                "Our assistant is running in offline mode right now, but here are catalog items related to \"{}\". Ask me about categories, prices or features to narrow it down.",
                last_user
            )
        }
    }
}

fn title_case(text: String) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

#[async_trait]
impl ProviderAdapter for ClientSideAdapter {
    fn id(&self) -> ProviderId {
        ID
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TEXT_ONLY
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn invoke(&self, operation: &Operation) -> Result<String, ProviderError> {
        match operation {
            Operation::GenerateProduct { prompt } => Ok(self.generate_product(prompt)),
            Operation::Chat { messages, .. } => Ok(self.chat_reply(messages)),
            Operation::AnalyzeImage { .. } => Err(ProviderError::unavailable(
                ID,
                "image analysis needs a multimodal provider",
            )),
        }
    }
}
