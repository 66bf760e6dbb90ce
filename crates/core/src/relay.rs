//! Request relay: screen input, pick a prompt, call the generator, shape
//! the reply.
//!
//! Every function here absorbs model failures and returns a canned
//! message instead. Successful model text is passed through verbatim.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::generation::{GenerationConfig, TextGenerator};
use crate::messages::{self, Endpoint};
use crate::prompts::{self, PromptFields, PromptStyle};
use crate::types::{AdviceRequest, ChatRequest, LearningPathRequest};
use crate::validation::validate_interests;

/// Style tag attached to every canned (non-model) advice result.
pub const ERROR_TAG: &str = "error";

/// Interests used by the style comparison when none are supplied.
pub const DEFAULT_COMPARISON_INTERESTS: &str = "web development and design";

/// Styles exercised by [`compare_styles`], in call order.
pub const COMPARISON_STYLES: [PromptStyle; 3] = [
    PromptStyle::Structured,
    PromptStyle::Expert,
    PromptStyle::Conversational,
];

// ---------------------------------------------------------------------------
// Reply shapes
// ---------------------------------------------------------------------------

/// Result of form advice: model text tagged with the submitted style name
/// (`structured` when none was sent), or a canned message tagged
/// [`ERROR_TAG`]. The tag is echoed as submitted even when the name is
/// unknown and the structured template was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResult {
    pub text: String,
    pub style_tag: String,
}

impl AdviceResult {
    fn canned(message: &str) -> Self {
        Self {
            text: message.to_string(),
            style_tag: ERROR_TAG.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.style_tag == ERROR_TAG
    }
}

/// JSON body of the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub error: bool,
}

/// JSON body of the learning-path endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LearningPathReply {
    Ready {
        #[serde(rename = "learningPath")]
        learning_path: String,
        error: bool,
    },
    Failed {
        response: String,
        error: bool,
    },
}

impl LearningPathReply {
    fn ready(text: String) -> Self {
        Self::Ready {
            learning_path: text,
            error: false,
        }
    }

    fn failed(message: &str) -> Self {
        Self::Failed {
            response: message.to_string(),
            error: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Relays
// ---------------------------------------------------------------------------

/// Form advice. Rejected interests never reach the generator.
pub async fn advise(generator: &dyn TextGenerator, request: &AdviceRequest) -> AdviceResult {
    let verdict = validate_interests(request.interests.as_deref());
    if let Some(message) = messages::verdict_message(verdict) {
        tracing::debug!(?verdict, "Interests rejected before model call");
        return AdviceResult::canned(message);
    }

    let interests = request.interests.as_deref().unwrap_or_default();
    let style = PromptStyle::resolve(request.prompt_style.as_deref());
    let prompt = prompts::render(style, &PromptFields::from_request(request, interests));

    match generator
        .generate(&prompt, Some(&GenerationConfig::advice()))
        .await
    {
        Ok(text) => AdviceResult {
            text,
            style_tag: request
                .prompt_style
                .clone()
                .unwrap_or_else(|| PromptStyle::default().as_str().to_string()),
        },
        Err(err) => {
            tracing::error!(endpoint = Endpoint::Advice.as_str(), error = %err, "Model call failed");
            AdviceResult::canned(messages::user_message(Endpoint::Advice, &err))
        }
    }
}

/// Chat turn. A blank message gets a nudge (not flagged as an error).
pub async fn chat(generator: &dyn TextGenerator, request: &ChatRequest) -> ChatReply {
    let message = match request.message.as_deref() {
        Some(m) if !m.trim().is_empty() => m,
        _ => {
            return ChatReply {
                response: messages::CHAT_EMPTY.to_string(),
                error: false,
            }
        }
    };

    let context = prompts::build_chat_context(&request.conversation_history, message);

    match generator
        .generate(&context, Some(&GenerationConfig::chat()))
        .await
    {
        Ok(text) => ChatReply {
            response: text,
            error: false,
        },
        Err(err) => {
            tracing::error!(endpoint = Endpoint::Chat.as_str(), error = %err, "Model call failed");
            ChatReply {
                response: messages::user_message(Endpoint::Chat, &err).to_string(),
                error: true,
            }
        }
    }
}

/// Learning-path roadmap for a target career.
pub async fn learning_path(
    generator: &dyn TextGenerator,
    request: &LearningPathRequest,
) -> LearningPathReply {
    let target_career = match request.target_career.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return LearningPathReply::failed(messages::LEARNING_PATH_NO_CAREER),
    };

    let prompt = prompts::render_learning_path(request, target_career);

    match generator
        .generate(&prompt, Some(&GenerationConfig::learning_path()))
        .await
    {
        Ok(text) => LearningPathReply::ready(text),
        Err(err) => {
            tracing::error!(endpoint = Endpoint::LearningPath.as_str(), error = %err, "Model call failed");
            LearningPathReply::failed(messages::user_message(Endpoint::LearningPath, &err))
        }
    }
}

/// Diagnostic comparison of [`COMPARISON_STYLES`] for one interests string.
///
/// Calls run sequentially with service-default sampling. `spacing` is
/// waited after each successful call. Failures are recorded as
/// `Error: <message>` and do not stop the run.
pub async fn compare_styles(
    generator: &dyn TextGenerator,
    interests: Option<&str>,
    spacing: Duration,
) -> BTreeMap<&'static str, String> {
    let interests = interests.unwrap_or(DEFAULT_COMPARISON_INTERESTS);
    let fields = PromptFields::with_defaults(interests);
    let mut results = BTreeMap::new();

    for style in COMPARISON_STYLES {
        let prompt = prompts::render(style, &fields);
        let outcome = match generator.generate(&prompt, None).await {
            Ok(text) => {
                if !spacing.is_zero() {
                    tokio::time::sleep(spacing).await;
                }
                text
            }
            Err(err) => format!("Error: {err}"),
        };
        results.insert(style.as_str(), outcome);
    }

    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
