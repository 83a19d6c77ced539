//! Error handling for the storefront AI service
//!
//! This module defines the error types used outside the router core.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
