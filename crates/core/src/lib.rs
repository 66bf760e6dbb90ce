//! Domain logic for the career advisor relay.
//!
//! Everything here is transport-agnostic: input screening, prompt
//! templates, generation presets and the [`generation::TextGenerator`] seam
//! that the HTTP layer injects a concrete model client through.

pub mod classifier;
pub mod error;
pub mod generation;
pub mod messages;
pub mod prompts;
pub mod relay;
pub mod types;
pub mod validation;
