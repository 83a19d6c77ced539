//! OpenAI provider

mod client;
mod config;

pub use client::OpenAiAdapter;
pub use config::OpenAiConfig;
