//! Upstream AI providers
//!
//! - `types` - provider identity, capabilities and routed operations
//! - `error` - unified provider error type
//! - `adapter` - the `ProviderAdapter` trait every upstream implements
//! - `provider_registry` - ordered set of registered adapters
//! - `openai`, `gemini`, `client_side` - concrete adapters

pub mod adapter;
pub mod client_side;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod provider_registry;
pub mod shared;
pub mod types;

pub use adapter::ProviderAdapter;
pub use client_side::ClientSideAdapter;
pub use error::{ErrorKind, ProviderError};
pub use gemini::{GeminiAdapter, GeminiConfig};
pub use openai::{OpenAiAdapter, OpenAiConfig};
pub use provider_registry::ProviderRegistry;
pub use types::{Capabilities, Capability, ChatRole, ChatTurn, Operation, ProviderId};
