//! Storefront assistant operations
//!
//! Thin layer over the router and the matcher that implements the request and
//! response contracts used by the HTTP API:
//!
//! - `generate_product` - idea text to a validated product listing
//! - `chat` - shopping conversation with ranked recommendations
//! - `analyze_image` - question about a product image (multimodal only)

pub mod chat;
pub mod image;
pub mod product;
pub mod prompts;

pub use chat::{ChatPreferences, ChatResponse, new_conversation_id};
pub use image::ImageAnalysis;
pub use product::{GeneratedProduct, ProductStatus, parse_product, strip_code_fence};

use crate::core::matcher::Catalog;
use crate::core::router::AiRouter;
use std::sync::Arc;

/// Longest accepted idea, message or question, in characters
pub const MAX_INPUT_CHARS: usize = 2000;

/// Assistant bound to one router and one catalog
#[derive(Debug, Clone)]
pub struct Assistant {
    router: Arc<AiRouter>,
    catalog: Arc<Catalog>,
}

impl Assistant {
    pub fn new(router: Arc<AiRouter>, catalog: Arc<Catalog>) -> Self {
        Self { router, catalog }
    }

    pub fn router(&self) -> &Arc<AiRouter> {
        &self.router
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
