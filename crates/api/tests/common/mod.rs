#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use advisor_core::error::ModelError;
use advisor_core::generation::{GenerationConfig, TextGenerator};
use advisor_gemini::GeminiConfig;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use advisor_api::config::ServerConfig;
use advisor_api::router::build_app_router;
use advisor_api::state::AppState;
use advisor_api::views::Views;

/// A recorded call to the fake generator.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub config: Option<GenerationConfig>,
}

/// Generator that replays a fixed outcome and records every prompt.
pub struct FakeGenerator {
    outcome: Result<String, ModelError>,
    latency: Duration,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Replies with `text` after sleeping `latency` on the tokio clock.
    pub fn slow(text: &str, latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            latency,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: ModelError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(
        &self,
        prompt: &str,
        config: Option<&GenerationConfig>,
    ) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            config: config.cloned(),
        });
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.outcome.clone()
    }
}

/// Build a test `ServerConfig` with safe defaults and no diagnostic delay.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: "public".into(),
        test_prompts_delay_ms: 0,
        gemini: GeminiConfig {
            api_key: String::new(),
            model: "test-model".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
    }
}

/// Build the full application router around the given generator, with the
/// same middleware stack production uses.
pub fn build_test_app(generator: Arc<FakeGenerator>) -> Router {
    build_test_app_with_config(generator, test_config())
}

pub fn build_test_app_with_config(generator: Arc<FakeGenerator>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
        views: Arc::new(Views::new().unwrap()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    post_raw(app, uri, "application/x-www-form-urlencoded", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
