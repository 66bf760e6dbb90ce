//! HTTP-level tests for `POST /api/chat`.

mod common;

use advisor_core::error::ModelError;
use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, FakeGenerator};
use serde_json::json;

#[tokio::test]
async fn blank_message_gets_nudge() {
    let generator = FakeGenerator::replying("unused");
    let app = build_test_app(generator.clone());

    let response = post_json(app, "/api/chat", json!({ "message": "  " })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], false);
    assert_eq!(
        json["response"],
        "🤔 Please share something about your career interests or ask me anything!"
    );
    assert!(generator.calls().is_empty());
}

#[tokio::test]
async fn reply_is_passed_through() {
    let generator = FakeGenerator::replying("Nursing is a great fit!");
    let app = build_test_app(generator.clone());

    let response = post_json(app, "/api/chat", json!({ "message": "Is nursing for me?" })).await;

    let json = body_json(response).await;
    assert_eq!(json, json!({ "response": "Nursing is a great fit!", "error": false }));

    let prompt = &generator.calls()[0].prompt;
    assert!(prompt.starts_with("You are a friendly AI career advisor."));
    assert!(!prompt.contains("Previous conversation:"));
    assert!(prompt.ends_with("User: Is nursing for me?\nAssistant:"));
}

#[tokio::test]
async fn only_last_six_history_turns_are_forwarded() {
    let generator = FakeGenerator::replying("ok");
    let app = build_test_app(generator.clone());

    let history: Vec<_> = (1..=9)
        .map(|i| {
            let role = if i % 2 == 1 { "user" } else { "assistant" };
            json!({ "role": role, "content": format!("msg-{i}") })
        })
        .collect();

    post_json(
        app,
        "/api/chat",
        json!({ "message": "Thanks", "conversationHistory": history }),
    )
    .await;

    let prompt = &generator.calls()[0].prompt;
    for dropped in ["msg-1\n", "msg-2\n", "msg-3\n"] {
        assert!(!prompt.contains(dropped), "{dropped} should be dropped");
    }
    assert!(prompt.contains(
        "Previous conversation:\nassistant: msg-4\nuser: msg-5\nassistant: msg-6\nuser: msg-7\nassistant: msg-8\nuser: msg-9\n\n"
    ));
}

#[tokio::test]
async fn rate_limit_is_flagged_as_error() {
    let app = build_test_app(FakeGenerator::failing(ModelError::RateLimited(String::new())));

    let response = post_json(app, "/api/chat", json!({ "message": "Hello?" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], true);
    assert_eq!(
        json["response"],
        "I'm getting too many messages right now. Please wait a moment and try again!"
    );
}

#[tokio::test]
async fn timeout_uses_generic_chat_message() {
    let app = build_test_app(FakeGenerator::failing(ModelError::Timeout { secs: 1 }));

    let json = body_json(post_json(app, "/api/chat", json!({ "message": "Hello?" })).await).await;

    assert_eq!(json["error"], true);
    assert_eq!(json["response"], "Sorry, I'm having trouble right now. Please try again!");
}
