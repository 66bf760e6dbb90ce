//! Screening of form-advice interests before any model call.

use serde::Serialize;

use crate::classifier::is_career_related;

/// Minimum trimmed length (in characters) for usable interests text.
pub const MIN_INTERESTS_LENGTH: usize = 5;

/// Outcome of screening the `interests` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestsVerdict {
    /// Absent, or blank after trimming.
    Empty,
    /// Fewer than [`MIN_INTERESTS_LENGTH`] characters after trimming.
    TooShort,
    /// Long enough but not about careers.
    OffTopic,
    Ok,
}

impl InterestsVerdict {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// Screen raw interests text. Checks run in order: empty, too short, topic.
pub fn validate_interests(interests: Option<&str>) -> InterestsVerdict {
    let Some(text) = interests else {
        return InterestsVerdict::Empty;
    };

    let trimmed_len = text.trim().chars().count();
    if trimmed_len == 0 {
        return InterestsVerdict::Empty;
    }
    if trimmed_len < MIN_INTERESTS_LENGTH {
        return InterestsVerdict::TooShort;
    }
    if !is_career_related(text) {
        return InterestsVerdict::OffTopic;
    }
    InterestsVerdict::Ok
}
