use advisor_core::prompts::PromptStyle;
use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Feature flags advertised by the health payload.
pub const FEATURES: [&str; 4] = ["chat", "forms", "multiple-prompts", "validation"];

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current time, RFC 3339 UTC.
    pub timestamp: String,
    /// Names of the available advice prompt styles.
    pub prompt_styles: Vec<&'static str>,
    pub features: [&'static str; 4],
}

/// GET /health -- liveness plus the advertised capabilities.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        prompt_styles: PromptStyle::ALL.iter().map(|s| s.as_str()).collect(),
        features: FEATURES,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
