//! Google Gemini provider

mod client;
mod config;

pub use client::GeminiAdapter;
pub use config::GeminiConfig;
