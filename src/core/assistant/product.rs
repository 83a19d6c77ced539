//! Product generation from a free-text idea
//!
//! Provider output goes through three steps: strip an optional Markdown code
//! fence, deserialize into a typed draft, then validate every field range.
//! Shape problems are `InvalidResponse` (and fail over); out-of-range values
//! are `Validation` errors.

use super::{Assistant, MAX_INPUT_CHARS};
use crate::core::matcher::ProductCategory;
use crate::core::providers::{Operation, ProviderError, ProviderId};
use crate::core::router::{AttemptBudget, OperationResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::prompts::product_prompt;

pub const MIN_PRICE: f64 = 100.0;
pub const MAX_PRICE: f64 = 15_000.0;
pub const MIN_STOCK: u32 = 1;
pub const MAX_STOCK: u32 = 50;

/// Listing status of a generated product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
}

/// A validated product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: u32,
    pub tags: Vec<String>,
    pub status: ProductStatus,
}

/// Provider output before range validation
#[derive(Debug, Deserialize)]
struct ProductDraft {
    name: String,
    description: String,
    price: f64,
    category: String,
    stock: i64,
    tags: Vec<String>,
}

/// Remove a surrounding ```json ... ``` fence if present
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string, e.g. "json"
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate raw provider output
pub fn parse_product(provider: ProviderId, raw: &str) -> Result<GeneratedProduct, ProviderError> {
    let body = strip_code_fence(raw);
    let draft: ProductDraft = serde_json::from_str(body).map_err(|e| {
        ProviderError::invalid_response(provider, format!("product is not valid JSON: {}", e))
    })?;

    let category: ProductCategory = draft
        .category
        .parse()
        .map_err(|e: String| ProviderError::invalid_response(provider, e))?;

    let invalid = |message: String| ProviderError::validation(Some(provider), message);

    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(invalid("name must not be empty".to_string()));
    }
    let description = draft.description.trim().to_string();
    if description.is_empty() {
        return Err(invalid("description must not be empty".to_string()));
    }
    if !draft.price.is_finite() || !(MIN_PRICE..=MAX_PRICE).contains(&draft.price) {
        return Err(invalid(format!(
            "price {} outside {:.2}..={:.2}",
            draft.price, MIN_PRICE, MAX_PRICE
        )));
    }
    if !(i64::from(MIN_STOCK)..=i64::from(MAX_STOCK)).contains(&draft.stock) {
        return Err(invalid(format!(
            "stock {} outside {}..={}",
            draft.stock, MIN_STOCK, MAX_STOCK
        )));
    }
    let tags: Vec<String> = draft
        .tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    if tags.is_empty() {
        return Err(invalid("tags must not be empty".to_string()));
    }

    Ok(GeneratedProduct {
        name,
        description,
        price: (draft.price * 100.0).round() / 100.0,
        category,
        // Range checked above
        stock: draft.stock as u32,
        tags,
        status: ProductStatus::Active,
    })
}

/// Reject empty or overlong input before any provider is tried
pub(crate) fn validate_input(field: &str, text: &str) -> Result<(), ProviderError> {
    if text.trim().is_empty() {
        return Err(ProviderError::validation(
            None,
            format!("{} must not be empty", field),
        ));
    }
    let length = text.chars().count();
    if length > MAX_INPUT_CHARS {
        return Err(ProviderError::validation(
            None,
            format!(
                "{} is {} characters, the limit is {}",
                field, length, MAX_INPUT_CHARS
            ),
        ));
    }
    Ok(())
}

impl Assistant {
    /// Turn a product idea into a validated listing
    pub async fn generate_product(&self, idea: &str) -> Result<GeneratedProduct, ProviderError> {
        let mut budget = AttemptBudget::per_call();
        self.generate_product_with_budget(idea, &mut budget).await
    }

    pub async fn generate_product_with_budget(
        &self,
        idea: &str,
        budget: &mut AttemptBudget,
    ) -> Result<GeneratedProduct, ProviderError> {
        validate_input("idea", idea)?;

        let operation = Operation::GenerateProduct {
            prompt: product_prompt(idea.trim()),
        };

        match self
            .router
            .execute_parsed(&operation, budget, parse_product)
            .await
        {
            OperationResult::Success {
                value,
                provider,
                attempts,
                latency_ms,
            } => {
                info!(
                    provider = %provider,
                    attempts,
                    latency_ms,
                    category = %value.category,
                    "product generated"
                );
                Ok(value)
            }
            OperationResult::Failure { error, .. } => Err(error),
        }
    }
}
