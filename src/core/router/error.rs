//! Router error types

/// Errors raised while building or reconfiguring the router
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Routing configuration failed validation
    #[error("Invalid routing configuration: {0}")]
    InvalidConfig(String),
}
