//! Health check endpoints

use crate::core::health_report;
use crate::core::router::SystemHealth;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(health_check))
            .route("/detailed", web::get().to(detailed_health_check)),
    );
}

/// Liveness probe
///
/// Always 200 while the process serves requests; `routing` reports whether
/// any provider can currently take work.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let routing = state.router.system_status().system_health;
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        routing,
        timestamp: chrono::Utc::now(),
        build: crate::build_info(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Component breakdown for operators
///
/// Responds 503 when no provider is available.
pub async fn detailed_health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Detailed health check requested");

    let report = health_report(&state.router, state.assistant.catalog());
    let response = if report.status == "unhealthy" {
        HttpResponse::ServiceUnavailable().json(ApiResponse::success(report))
    } else {
        HttpResponse::Ok().json(ApiResponse::success(report))
    };
    Ok(response)
}

/// Health status information
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub routing: SystemHealth,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub build: crate::BuildInfo,
}
