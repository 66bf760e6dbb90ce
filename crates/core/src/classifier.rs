//! Keyword-based topic classifier for free-text career input.
//!
//! Pure substring matching on the lower-cased text. A casual greeting
//! anywhere in the input overrides any career keyword, so
//! `"hi, I love coding"` is off-topic.

/// Career, interest, skill and education terms.
pub const CAREER_KEYWORDS: &[&str] = &[
    // Career/job
    "career",
    "job",
    "work",
    "profession",
    "occupation",
    "employment",
    // Interest indicators
    "interested in",
    "love",
    "enjoy",
    "passionate about",
    "good at",
    "like to",
    // Skills and fields
    "programming",
    "coding",
    "design",
    "marketing",
    "business",
    "healthcare",
    "engineering",
    "teaching",
    "writing",
    "art",
    "music",
    "science",
    "finance",
    "technology",
    "computer",
    "creative",
    "analytical",
    "helping people",
    // Education/experience
    "studying",
    "degree in",
    "experience with",
    "background in",
    "skills in",
];

/// Greeting and small-talk phrases.
pub const CASUAL_PHRASES: &[&str] = &[
    "how are you",
    "hello",
    "hi",
    "hey",
    "what's up",
    "how do you do",
    "good morning",
    "good evening",
    "whats up",
    "sup",
    "yo",
];

/// Inputs must be strictly longer than this many characters.
pub const MIN_CLASSIFIED_LENGTH: usize = 10;

/// Decide whether `text` is about careers.
///
/// True only when a career keyword occurs, no casual phrase occurs, and the
/// untrimmed text is longer than [`MIN_CLASSIFIED_LENGTH`] characters.
pub fn is_career_related(text: &str) -> bool {
    let lower = text.to_lowercase();

    let has_keyword = CAREER_KEYWORDS.iter().any(|kw| lower.contains(kw));
    let is_casual = CASUAL_PHRASES.iter().any(|phrase| lower.contains(phrase));

    has_keyword && !is_casual && text.chars().count() > MIN_CLASSIFIED_LENGTH
}
