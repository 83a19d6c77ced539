//! Error handling utilities
//!
//! Gateway-level errors for configuration, catalog loading and the HTTP layer.

pub mod error;

pub use error::*;
