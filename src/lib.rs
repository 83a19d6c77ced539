//! # storefront-ai
//!
//! Multi-provider AI routing for a storefront API, with health-aware failover
//! and catalog recommendations.
//!
//! ## Features
//!
//! - **Failover routing**: primary provider first, at most one fallback hop per call
//! - **Health tracking**: consecutive-error demotion, response time averages, daily usage
//! - **Failover cooldown**: no thrashing between providers under sustained errors
//! - **Recommendations**: deterministic keyword and intent matching over the catalog
//! - **Storefront operations**: product generation, shopping chat, image questions
//!
//! ## Router usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront_ai::core::providers::{ClientSideAdapter, ProviderRegistry};
//! use storefront_ai::core::router::{AiRouter, RoutingConfig};
//! use storefront_ai::core::assistant::Assistant;
//! use storefront_ai::core::matcher::Catalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ProviderRegistry::new().with(Arc::new(ClientSideAdapter::new()));
//!     let router = Arc::new(AiRouter::new(registry, RoutingConfig::default())?);
//!     let assistant = Assistant::new(router.clone(), Arc::new(Catalog::default()));
//!
//!     let product = assistant.generate_product("a lamp that follows the sun").await?;
//!     println!("{} for ${:.2}", product.name, product.price);
//!     println!("{:?}", router.system_status().system_health);
//!     Ok(())
//! }
//! ```
//!
//! ## Service mode
//!
//! ```rust,no_run
//! use storefront_ai::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/storefront.yaml").await?;
//!     storefront_ai::server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::Storefront;
pub use core::assistant::{Assistant, ChatPreferences, ChatResponse, GeneratedProduct};
pub use core::matcher::{CandidateScore, Catalog, CatalogItem, ProductCategory, rank};
pub use core::providers::{ProviderAdapter, ProviderError, ProviderId, ProviderRegistry};
pub use core::router::{AiRouter, OperationResult, RoutingConfig, SystemStatus};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

/// Metadata captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
