//! Generation parameters and the text-generator seam.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ModelError;

/// Sampling parameters sent with a generation request.
///
/// Serializes with the camelCase field names the hosted model expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

/// Stop sequence used by form advice.
pub const ADVICE_STOP_SEQUENCE: &str = "END_OF_RESPONSE";

impl GenerationConfig {
    /// Form advice: balanced, long answers.
    pub fn advice() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: Some(40),
            max_output_tokens: 2048,
            stop_sequences: vec![ADVICE_STOP_SEQUENCE.to_string()],
        }
    }

    /// Chat: warmer sampling, shorter replies.
    pub fn chat() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.9,
            top_k: None,
            max_output_tokens: 1024,
            stop_sequences: Vec::new(),
        }
    }

    pub fn learning_path() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: None,
            max_output_tokens: 2048,
            stop_sequences: Vec::new(),
        }
    }
}

/// An external text-generation service.
///
/// Implemented by the Gemini client in production and by fakes in tests.
/// `config = None` leaves sampling to the service defaults.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: Option<&GenerationConfig>,
    ) -> Result<String, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn advice_config_serializes_camel_case() {
        let value = serde_json::to_value(GenerationConfig::advice()).unwrap();
        assert_eq!(value["topP"], json!(0.8_f32));
        assert_eq!(value["topK"], 40);
        assert_eq!(value["maxOutputTokens"], 2048);
        assert_eq!(value["stopSequences"], json!(["END_OF_RESPONSE"]));
    }

    #[test]
    fn chat_config_omits_top_k_and_stop_sequences() {
        let value = serde_json::to_value(GenerationConfig::chat()).unwrap();
        assert!(value.get("topK").is_none());
        assert!(value.get("stopSequences").is_none());
        assert_eq!(value["maxOutputTokens"], 1024);
    }

    #[test]
    fn presets_differ_by_endpoint() {
        assert_eq!(GenerationConfig::advice().temperature, 0.7);
        assert_eq!(GenerationConfig::chat().temperature, 0.8);
        assert_eq!(GenerationConfig::learning_path().temperature, 0.7);
        assert_eq!(GenerationConfig::learning_path().top_k, None);
    }
}
