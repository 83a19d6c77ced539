//! Integration tests
//!
//! Components wired together through the public API only.

pub mod config_tests;
pub mod failover_tests;
pub mod http_adapter_tests;
