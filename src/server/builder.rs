//! Server startup from configuration

use crate::config::Config;
use crate::core::Storefront;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::Result;
use tracing::info;

/// Build the service, start background probes and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting storefront AI service");

    let storefront = Storefront::new(config)?;
    let probe = storefront.start_background_services().await;

    let server = HttpServer::new(AppState::from_storefront(&storefront));
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/ai/status - Routing status");
    info!("   POST /api/ai/generate-product - Product generation");
    info!("   POST /api/ai/chat - Shopping assistant");
    info!("   POST /api/ai/analyze-image - Image questions");

    let outcome = server.start().await;
    if let Some(probe) = probe {
        probe.abort();
    }
    outcome
}
