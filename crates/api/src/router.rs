//! The one place the HTTP surface is assembled.
//!
//! `main.rs` and `tests/common/mod.rs` both go through [`build_app_router`],
//! so tests exercise the production middleware.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::{handle_panic, not_found};
use crate::routes;
use crate::state::AppState;

/// Subdirectories of `static_dir`, each served under `/<name>`.
const STATIC_MOUNTS: [&str; 3] = ["css", "js", "images"];

/// Assemble routes, static mounts, the JSON 404 and middleware.
///
/// Pages, `/api/*`, `/health` and static files answer 408 once
/// `request_timeout_secs` passes. `/test-prompts` makes three sequential
/// model calls, so it gets [`ServerConfig::diagnostics_timeout`] instead.
///
/// Outside the deadlines, from the inside out: panics become the generic
/// 500 body, the `x-request-id` header is echoed back, every request gets
/// an INFO span, a UUID request id is assigned when the client sent none,
/// and CORS answers last.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let mut timed = Router::new()
        .merge(routes::health::router())
        .merge(routes::app_routes());
    for mount in STATIC_MOUNTS {
        timed = timed.nest_service(
            &format!("/{mount}"),
            ServeDir::new(config.static_dir.join(mount)),
        );
    }

    let diagnostics =
        routes::diagnostics_routes().layer(deadline(config.diagnostics_timeout()));

    timed
        .layer(deadline(config.request_timeout()))
        .merge(diagnostics)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

fn deadline(limit: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, limit)
}

/// CORS for the configured origins: GET and POST, `Content-Type` only,
/// credentials allowed, preflight cached for an hour.
///
/// An origin that is not a valid header value aborts startup with a panic
/// naming it.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
