//! Utility modules for the storefront AI service
//!
//! - **error**: the service-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
