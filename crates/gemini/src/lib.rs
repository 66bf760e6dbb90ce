//! Gemini-backed [`advisor_core::generation::TextGenerator`].

pub mod api;
pub mod config;

pub use api::GeminiClient;
pub use config::GeminiConfig;
