//! Prompt templates and rendering.
//!
//! The template bodies live as plain text under `prompts/` and are embedded
//! at compile time. Placeholders use `{name}` syntax and are filled in a
//! single pass, so user text containing `{...}` is never re-expanded.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::types::{AdviceRequest, ChatTurn, LearningPathRequest, DEFAULT_CURRENT_SKILLS, UNSPECIFIED};

// ---------------------------------------------------------------------------
// Template assets
// ---------------------------------------------------------------------------

const STRUCTURED: &str = include_str!("../prompts/structured.txt");
const EXPERT: &str = include_str!("../prompts/expert.txt");
const ANALYTICAL: &str = include_str!("../prompts/analytical.txt");
const CONVERSATIONAL: &str = include_str!("../prompts/conversational.txt");
const DATADRIVEN: &str = include_str!("../prompts/datadriven.txt");
const LEARNING_PATH: &str = include_str!("../prompts/learning_path.txt");

/// Regex pattern matching `{placeholder}` tokens in prompt templates.
pub const PLACEHOLDER_PATTERN: &str = r"\{[a-zA-Z_][a-zA-Z0-9_]*\}";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"));

/// Career stage used by the expert template when no experience is supplied.
pub const DEFAULT_CAREER_STAGE: &str = "entry";

/// Number of prior chat turns included in the outbound context.
pub const CHAT_HISTORY_WINDOW: usize = 6;

const CHAT_PREAMBLE: &str = "You are a friendly AI career advisor. Have natural conversations about careers, provide advice, answer questions, and help users explore their interests. Be conversational, helpful, and engaging.\n\n";

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// The five advice prompt variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    #[default]
    Structured,
    Expert,
    Analytical,
    Conversational,
    Datadriven,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 5] = [
        PromptStyle::Structured,
        PromptStyle::Expert,
        PromptStyle::Analytical,
        PromptStyle::Conversational,
        PromptStyle::Datadriven,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Expert => "expert",
            Self::Analytical => "analytical",
            Self::Conversational => "conversational",
            Self::Datadriven => "datadriven",
        }
    }

    /// Exact, case-sensitive match against the style names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == name)
    }

    /// Like [`parse`](Self::parse) but falls back to `Structured`.
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or_default()
    }

    fn template(self) -> &'static str {
        match self {
            Self::Structured => STRUCTURED,
            Self::Expert => EXPERT,
            Self::Analytical => ANALYTICAL,
            Self::Conversational => CONVERSATIONAL,
            Self::Datadriven => DATADRIVEN,
        }
    }
}

/// Subject fields substituted into an advice template.
#[derive(Debug, Clone, Copy)]
pub struct PromptFields<'a> {
    pub interests: &'a str,
    pub experience: &'a str,
    pub location: &'a str,
    /// Used only by the expert template.
    pub career_stage: &'a str,
}

impl<'a> PromptFields<'a> {
    /// Fields for a bare interests string with every other field defaulted.
    pub fn with_defaults(interests: &'a str) -> Self {
        Self {
            interests,
            experience: crate::types::DEFAULT_EXPERIENCE,
            location: crate::types::DEFAULT_LOCATION,
            career_stage: DEFAULT_CAREER_STAGE,
        }
    }

    /// Fields from a form request. The experience level doubles as the
    /// expert template's career stage.
    pub fn from_request(request: &'a AdviceRequest, interests: &'a str) -> Self {
        Self {
            interests,
            experience: &request.experience,
            location: &request.location,
            career_stage: &request.experience,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Replace every known `{name}` placeholder in `template` in one pass.
/// Unknown placeholders are left untouched.
fn fill<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v str>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[0];
            let name = &token[1..token.len() - 1];
            lookup(name).unwrap_or(token).to_string()
        })
        .into_owned()
}

/// Render the advice prompt for `style`.
pub fn render(style: PromptStyle, fields: &PromptFields<'_>) -> String {
    fill(style.template(), |name| match name {
        "interests" => Some(fields.interests),
        "experience" => Some(fields.experience),
        "location" => Some(fields.location),
        "career_stage" => Some(fields.career_stage),
        _ => None,
    })
}

/// Render the learning-path prompt. Absent optional fields get fixed
/// stand-ins so the prompt never carries empty slots.
pub fn render_learning_path(request: &LearningPathRequest, target_career: &str) -> String {
    let current_skills = non_empty(request.current_skills.as_deref()).unwrap_or(DEFAULT_CURRENT_SKILLS);
    let timeline = request.timeline.as_deref().unwrap_or(UNSPECIFIED);
    let learning_style = request.learning_style.as_deref().unwrap_or(UNSPECIFIED);
    let budget = request.budget.as_deref().unwrap_or(UNSPECIFIED);

    fill(LEARNING_PATH, |name| match name {
        "target_career" => Some(target_career),
        "current_skills" => Some(current_skills),
        "timeline" => Some(timeline),
        "learning_style" => Some(learning_style),
        "budget" => Some(budget),
        _ => None,
    })
}

/// Build the chat context: preamble, the last [`CHAT_HISTORY_WINDOW`] turns
/// in their original order, then the new message.
pub fn build_chat_context(history: &[ChatTurn], message: &str) -> String {
    let mut context = String::from(CHAT_PREAMBLE);

    if !history.is_empty() {
        context.push_str("Previous conversation:\n");
        let start = history.len().saturating_sub(CHAT_HISTORY_WINDOW);
        for turn in &history[start..] {
            context.push_str(&format!("{}: {}\n", turn.role, turn.content));
        }
        context.push('\n');
    }

    context.push_str(&format!("User: {message}\nAssistant:"));
    context
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
