//! Prompt construction for assistant operations

use crate::core::matcher::{Catalog, ProductCategory};
use crate::core::providers::client_side::IDEA_PREFIX;
use crate::core::providers::ChatTurn;

use super::chat::ChatPreferences;

/// Number of earlier conversation messages sent along with a chat request
pub const HISTORY_WINDOW: usize = 10;

/// Catalog entries listed in the chat system prompt
const CATALOG_PROMPT_ITEMS: usize = 20;

/// Prompt asking for one product as a JSON object
pub fn product_prompt(idea: &str) -> String {
    let categories = ProductCategory::ALL
        .iter()
        .map(|c| format!("\"{}\"", c.name()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a product listing for a futuristic technology storefront.\n\
         Respond with a single JSON object and nothing else, using exactly these fields:\n\
         - name: string\n\
         - description: string, two or three sentences\n\
         - price: number between 100.00 and 15000.00\n\
         - category: one of {categories}\n\
         - stock: integer between 1 and 50\n\
         - tags: array of 3 to 6 short lowercase strings\n\
         {IDEA_PREFIX} {idea}"
    )
}

/// System prompt for the shopping assistant
pub fn chat_system_prompt(catalog: &Catalog, preferences: &ChatPreferences) -> String {
    let mut prompt = String::from(
        "You are the shopping assistant of a futuristic technology storefront. \
         Answer briefly and helpfully, and mention products from the catalog by name \
         when they fit the question.\n",
    );

    if !catalog.is_empty() {
        prompt.push_str("Catalog:\n");
        for item in catalog.items().iter().take(CATALOG_PROMPT_ITEMS) {
            prompt.push_str(&format!(
                "- {} ({}, ${:.2})\n",
                item.name, item.category, item.price
            ));
        }
    }

    if let Some(summary) = preference_summary(preferences) {
        prompt.push_str(&format!("Shopper preferences: {}\n", summary));
    }

    prompt
}

fn preference_summary(preferences: &ChatPreferences) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(range) = preferences.price_range {
        parts.push(format!("price between ${:.2} and ${:.2}", range.min, range.max));
    }
    if !preferences.categories.is_empty() {
        let names = preferences
            .categories
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("interested in {}", names));
    }
    (!parts.is_empty()).then(|| parts.join("; "))
}

/// Recent history followed by the new message
pub fn chat_turns(message: &str, history: &[ChatTurn]) -> Vec<ChatTurn> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut turns: Vec<ChatTurn> = history[start..]
        .iter()
        .filter(|turn| !turn.content.trim().is_empty())
        .cloned()
        .collect();
    turns.push(ChatTurn::user(message));
    turns
}
