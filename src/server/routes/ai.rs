//! Storefront AI endpoints
//!
//! Handlers deserialize the request, call the assistant and wrap the result
//! in `ApiResponse`. Errors are returned as `GatewayError`, which renders the
//! status code and error body.

use crate::core::assistant::ChatPreferences;
use crate::core::providers::ChatTurn;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

/// Configure AI routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/ai")
            .route("/generate-product", web::post().to(generate_product))
            .route("/chat", web::post().to(chat))
            .route("/analyze-image", web::post().to(analyze_image))
            .route("/status", web::get().to(system_status)),
    );
}

#[derive(Debug, Deserialize)]
pub struct GenerateProductRequest {
    pub idea: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub preferences: ChatPreferences,
    #[serde(default, alias = "conversation_id")]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    #[serde(alias = "image_url")]
    pub image_url: String,
    pub question: String,
}

/// Generate a product listing from an idea
pub async fn generate_product(
    state: web::Data<AppState>,
    request: web::Json<GenerateProductRequest>,
) -> Result<HttpResponse, GatewayError> {
    info!(idea_chars = request.idea.chars().count(), "Product generation requested");

    let product = state
        .assistant
        .generate_product(&request.idea)
        .await
        .inspect_err(|e| warn!(error = %e, "Product generation failed"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}

/// Shopping assistant conversation turn
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    let request = request.into_inner();
    info!(history = request.history.len(), "Chat requested");

    let response = state
        .assistant
        .chat(
            &request.message,
            &request.history,
            &request.preferences,
            request.conversation_id,
        )
        .await
        .inspect_err(|e| warn!(error = %e, "Chat failed"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Answer a question about a product image
pub async fn analyze_image(
    state: web::Data<AppState>,
    request: web::Json<AnalyzeImageRequest>,
) -> Result<HttpResponse, GatewayError> {
    info!("Image analysis requested");

    let analysis = state
        .assistant
        .analyze_image(&request.image_url, &request.question)
        .await
        .inspect_err(|e| warn!(error = %e, "Image analysis failed"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(analysis)))
}

/// Routing status snapshot
pub async fn system_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(state.router.system_status()))
}
