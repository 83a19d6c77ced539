//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::Storefront;
use crate::core::assistant::Assistant;
use crate::core::router::AiRouter;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are cheap to clone; actix clones the state once per worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Router owned by the service, never a process-wide singleton
    pub router: Arc<AiRouter>,
    /// Assistant operations over the router and catalog
    pub assistant: Assistant,
}

impl AppState {
    pub fn new(config: Arc<Config>, router: Arc<AiRouter>, assistant: Assistant) -> Self {
        Self {
            config,
            router,
            assistant,
        }
    }

    /// State backed by an initialized service
    pub fn from_storefront(storefront: &Storefront) -> Self {
        Self {
            config: Arc::new(storefront.config().clone()),
            router: storefront.router().clone(),
            assistant: storefront.assistant().clone(),
        }
    }
}
