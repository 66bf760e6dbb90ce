pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page and API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                      landing page with advice form (GET)
/// /chat                  chat page (GET)
/// /advice                form advice, renders result page (POST)
///
/// /api/chat              chat turn (POST)
/// /api/learning-path     learning roadmap (POST)
/// /api/feedback          feedback, logged only (POST)
/// ```
///
/// `/test-prompts` lives in [`diagnostics_routes`] because it needs a
/// longer deadline than these.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/chat", get(handlers::pages::chat_page))
        .route("/advice", post(handlers::advice::submit_advice))
        .nest("/api", api_routes())
}

/// `/test-prompts`: diagnostic style comparison (POST).
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new().route("/test-prompts", post(handlers::diagnostics::compare_prompts))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::send_message))
        .route(
            "/learning-path",
            post(handlers::learning_path::generate_learning_path),
        )
        .route("/feedback", post(handlers::feedback::submit_feedback))
}
