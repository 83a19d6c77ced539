//! Common test utilities for storefront-ai
//!
//! - Scripted providers that replay canned outcomes
//! - Catalog and product fixtures
//! - Custom assertions and helpers

pub mod assertions;
pub mod fixtures;
pub mod providers;

pub use fixtures::{CatalogFactory, product_json};
pub use providers::ScriptedProvider;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
