use std::collections::BTreeMap;
use std::time::Duration;

use advisor_core::relay;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ComparePromptsRequest {
    #[serde(default)]
    pub interests: Option<String>,
}

impl ComparePromptsRequest {
    /// A blank body means "no fields"; anything else must be a JSON object.
    fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}

/// POST /test-prompts
///
/// Diagnostic: runs the structured, expert and conversational templates
/// against the model and returns each style's output (or error) by name.
/// The body is optional.
pub async fn compare_prompts(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<BTreeMap<&'static str, String>>> {
    let input = ComparePromptsRequest::from_body(&body)?;
    let interests = input.interests.as_deref().filter(|s| !s.is_empty());
    let spacing = Duration::from_millis(state.config.test_prompts_delay_ms);

    Ok(Json(
        relay::compare_styles(state.generator.as_ref(), interests, spacing).await,
    ))
}
