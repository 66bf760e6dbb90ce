use advisor_core::relay::{self, LearningPathReply};
use advisor_core::types::LearningPathRequest;
use axum::extract::State;
use axum::Json;

use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/learning-path
pub async fn generate_learning_path(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearningPathRequest>,
) -> Json<LearningPathReply> {
    Json(relay::learning_path(state.generator.as_ref(), &request).await)
}
