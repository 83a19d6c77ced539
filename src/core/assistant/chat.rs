//! Shopping assistant conversation

use super::Assistant;
use super::product::validate_input;
use super::prompts::{chat_system_prompt, chat_turns};
use crate::core::matcher::{CandidateScore, Catalog, PriceRange, ProductCategory, rank};
use crate::core::providers::{Capability, ChatTurn, ErrorKind, Operation, ProviderError};
use crate::core::router::{AttemptBudget, OperationResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Maximum number of suggested follow-up questions
pub const MAX_SUGGESTED_QUESTIONS: usize = 3;

/// Shopper preferences narrowing recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPreferences {
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
}

/// Assistant reply with ranked recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub recommendations: Vec<CandidateScore>,
    pub suggested_questions: Vec<String>,
    pub conversation_id: String,
}

pub fn new_conversation_id() -> String {
    format!("conv_{}", Uuid::new_v4())
}

/// Follow-up questions from the top recommendation or the preferred categories
pub fn suggested_questions(
    recommendations: &[CandidateScore],
    catalog: &Catalog,
    preferences: &ChatPreferences,
) -> Vec<String> {
    let mut questions = Vec::new();

    if let Some(top) = recommendations
        .first()
        .and_then(|candidate| catalog.get(&candidate.item_id))
    {
        questions.push(format!("What makes the {} special?", top.name));
        questions.push(format!("Is the {} in stock?", top.name));
        questions.push(format!("What else do you have in {}?", top.category));
    } else if !preferences.categories.is_empty() {
        for category in &preferences.categories {
            questions.push(format!("What are your best {} products?", category));
        }
        questions.push("Which products are new this week?".to_string());
    } else {
        questions.push("What are your most popular products?".to_string());
        questions.push("Do you have anything under $500?".to_string());
        questions.push("Which products are new this week?".to_string());
    }

    questions.truncate(MAX_SUGGESTED_QUESTIONS);
    questions
}

impl Assistant {
    /// Answer a shopping question with recommendations
    pub async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        preferences: &ChatPreferences,
        conversation_id: Option<String>,
    ) -> Result<ChatResponse, ProviderError> {
        let mut budget = AttemptBudget::per_call();
        self.chat_with_budget(message, history, preferences, conversation_id, &mut budget)
            .await
    }

    /// Answer using attempts from a caller-owned budget
    ///
    /// Callers that retry the conversation pipeline pass the same budget, so
    /// the total number of provider attempts for one request stays bounded.
    pub async fn chat_with_budget(
        &self,
        message: &str,
        history: &[ChatTurn],
        preferences: &ChatPreferences,
        conversation_id: Option<String>,
        budget: &mut AttemptBudget,
    ) -> Result<ChatResponse, ProviderError> {
        validate_input("message", message)?;

        if !self
            .router
            .registry()
            .has_capable(Capability::TextGeneration)
        {
            warn!("chat requested with no text provider registered");
            return Err(ProviderError::assistant_offline(
                "no text generation provider is configured",
            ));
        }

        let operation = Operation::Chat {
            system: chat_system_prompt(&self.catalog, preferences),
            messages: chat_turns(message.trim(), history),
        };

        let reply = match self.router.execute_with_budget(&operation, budget).await {
            OperationResult::Success {
                value,
                provider,
                attempts,
                ..
            } => {
                info!(provider = %provider, attempts, "chat answered");
                value
            }
            OperationResult::Failure { error, .. } => {
                // Nothing eligible to try at all
                if error.kind() == ErrorKind::ProviderUnavailable && error.provider().is_none() {
                    return Err(ProviderError::assistant_offline(error.to_string()));
                }
                return Err(error);
            }
        };

        let candidates = self
            .catalog
            .filter_by_preferences(preferences.price_range, &preferences.categories);
        let recommendations = rank(message, &reply, &candidates);
        let suggested_questions = suggested_questions(&recommendations, &self.catalog, preferences);

        Ok(ChatResponse {
            message: reply,
            recommendations,
            suggested_questions,
            conversation_id: conversation_id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(new_conversation_id),
        })
    }
}
