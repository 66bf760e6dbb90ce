//! Static pages.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.index()?))
}

/// GET /chat
pub async fn chat_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.chat()?))
}
