//! Fire-and-forget feedback. Nothing is validated or stored.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::AppJson;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub rating: Value,
    #[serde(default)]
    pub page: Value,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/feedback
pub async fn submit_feedback(AppJson(input): AppJson<FeedbackRequest>) -> Json<FeedbackResponse> {
    tracing::info!(
        "Feedback received: {} on {} page",
        plain(&input.rating),
        plain(&input.page)
    );

    Json(FeedbackResponse {
        success: true,
        message: "Thank you for your feedback!",
    })
}

/// Strings print without quotes; other JSON values print as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
