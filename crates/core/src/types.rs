//! Request-scoped entities. Nothing here outlives a single request.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPERIENCE: &str = "beginner";
pub const DEFAULT_LOCATION: &str = "global";
pub const DEFAULT_CURRENT_SKILLS: &str = "Starting from basics";
pub const UNSPECIFIED: &str = "Not specified";

fn default_experience() -> String {
    DEFAULT_EXPERIENCE.to_string()
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Form-based advice request (`POST /advice`).
///
/// `prompt_style` is kept as raw text; unknown values resolve to the
/// structured template via [`crate::prompts::PromptStyle::resolve`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub prompt_style: Option<String>,
}

impl AdviceRequest {
    pub fn new(interests: impl Into<String>) -> Self {
        Self {
            interests: Some(interests.into()),
            experience: default_experience(),
            location: default_location(),
            prompt_style: None,
        }
    }
}

/// Speaker of a history turn. Only `"user"` and `"assistant"` parse; any
/// other role (e.g. `"system"`) fails deserialization of the whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One prior message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Chat request (`POST /api/chat`).
///
/// `conversationHistory` entries must use the `user` or `assistant` role;
/// see [`ChatRole`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Learning-path request (`POST /api/learning-path`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathRequest {
    #[serde(default)]
    pub target_career: Option<String>,
    #[serde(default)]
    pub current_skills: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
}
