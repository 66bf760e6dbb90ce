use advisor_core::relay::{self, ChatReply};
use advisor_core::types::ChatRequest;
use axum::extract::State;
use axum::Json;

use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/chat
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChatRequest>,
) -> Json<ChatReply> {
    tracing::debug!(
        history_len = request.conversation_history.len(),
        "Chat request received"
    );
    Json(relay::chat(state.generator.as_ref(), &request).await)
}
