//! Configuration data models
//!
//! This module defines the configuration structures loaded from YAML.

#![allow(missing_docs)]

pub mod logging;
pub mod providers;
pub mod routing;
pub mod server;
pub mod storefront;

pub use logging::*;
pub use providers::*;
pub use routing::*;
pub use server::*;
pub use storefront::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3001
}

/// Default catalog location
pub fn default_catalog_path() -> String {
    "config/catalog.json".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
