//! Product image questions

use super::Assistant;
use super::product::validate_input;
use crate::core::providers::{Operation, ProviderError, ProviderId};
use crate::core::router::AttemptBudget;
use serde::Serialize;
use tracing::info;

/// Answer about a product image
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    pub answer: String,
    pub provider: ProviderId,
}

fn validate_image_url(image_url: &str) -> Result<(), ProviderError> {
    let url = image_url.trim();
    let supported = url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("data:image/");
    if !supported {
        return Err(ProviderError::validation(
            None,
            "image_url must be an http(s) URL or an image data URL",
        ));
    }
    Ok(())
}

impl Assistant {
    /// Ask a multimodal provider about an image
    pub async fn analyze_image(
        &self,
        image_url: &str,
        question: &str,
    ) -> Result<ImageAnalysis, ProviderError> {
        validate_input("question", question)?;
        validate_image_url(image_url)?;

        let operation = Operation::AnalyzeImage {
            prompt: question.trim().to_string(),
            image_url: image_url.trim().to_string(),
        };

        let mut budget = AttemptBudget::per_call();
        let result = self
            .router
            .execute_with_budget(&operation, &mut budget)
            .await;
        let provider = result.provider();
        let answer = result.into_result()?;

        info!(provider = %provider, "image analyzed");
        Ok(ImageAnalysis { answer, provider })
    }
}
