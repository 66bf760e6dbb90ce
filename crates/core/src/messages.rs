//! Canned user-facing messages.
//!
//! Model failures are mapped through [`user_message`] only. Each endpoint
//! keeps its own wording.

use crate::error::ModelError;
use crate::validation::InterestsVerdict;

/// The endpoint a message is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Advice,
    Chat,
    LearningPath,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advice => "advice",
            Self::Chat => "chat",
            Self::LearningPath => "learning-path",
        }
    }
}

// --- Validation ---

pub const INTERESTS_EMPTY: &str = "🤔 Please tell me about your interests, skills, or what kind of work excites you so I can provide career guidance!";

pub const INTERESTS_TOO_SHORT: &str = "💭 Could you share more details about your interests or career goals? The more you tell me, the better advice I can give!";

pub const INTERESTS_OFF_TOPIC: &str = "👋 Hi there! I'm an AI career advisor, so I'm here to help with career guidance. \n\nIf you're looking for career advice, try telling me about:\n- Your interests (e.g., \"I love technology and helping people\")  \n- Skills you have (e.g., \"I'm good at writing and creative problem solving\")\n- Fields you're curious about (e.g., \"I'm interested in healthcare and business\")\n\nWhat career topics would you like to explore?";

pub const CHAT_EMPTY: &str =
    "🤔 Please share something about your career interests or ask me anything!";

pub const LEARNING_PATH_NO_CAREER: &str = "Please specify what career you're interested in!";

// --- Model failures ---

const ADVICE_RATE_LIMITED: &str = "⏰ Too many requests right now. Please wait a moment and try again!";
const ADVICE_BAD_REQUEST: &str =
    "There was an issue with your request. Please try rephrasing your interests.";
const ADVICE_FORBIDDEN: &str = "API access issue. Please check your API key configuration.";
const ADVICE_FALLBACK: &str =
    "😅 Our career advisor is taking a quick break. Please try again in a moment!";

const CHAT_RATE_LIMITED: &str =
    "I'm getting too many messages right now. Please wait a moment and try again!";
const CHAT_FALLBACK: &str = "Sorry, I'm having trouble right now. Please try again!";

const LEARNING_PATH_RATE_LIMITED: &str = "Too many requests. Please wait a moment and try again!";
const LEARNING_PATH_FALLBACK: &str =
    "Sorry, I couldn't generate your learning path right now. Please try again!";

/// Guidance shown for a rejected interests field, or `None` when it passed.
pub fn verdict_message(verdict: InterestsVerdict) -> Option<&'static str> {
    match verdict {
        InterestsVerdict::Empty => Some(INTERESTS_EMPTY),
        InterestsVerdict::TooShort => Some(INTERESTS_TOO_SHORT),
        InterestsVerdict::OffTopic => Some(INTERESTS_OFF_TOPIC),
        InterestsVerdict::Ok => None,
    }
}

/// Map a model failure to the message shown on `endpoint`.
///
/// Only form advice distinguishes bad-request and forbidden; the JSON
/// endpoints single out rate limiting and use a fallback for the rest.
pub fn user_message(endpoint: Endpoint, err: &ModelError) -> &'static str {
    match (endpoint, err) {
        (Endpoint::Advice, ModelError::RateLimited(_)) => ADVICE_RATE_LIMITED,
        (Endpoint::Advice, ModelError::BadRequest(_)) => ADVICE_BAD_REQUEST,
        (Endpoint::Advice, ModelError::Forbidden(_)) => ADVICE_FORBIDDEN,
        (Endpoint::Advice, _) => ADVICE_FALLBACK,

        (Endpoint::Chat, ModelError::RateLimited(_)) => CHAT_RATE_LIMITED,
        (Endpoint::Chat, _) => CHAT_FALLBACK,

        (Endpoint::LearningPath, ModelError::RateLimited(_)) => LEARNING_PATH_RATE_LIMITED,
        (Endpoint::LearningPath, _) => LEARNING_PATH_FALLBACK,
    }
}
