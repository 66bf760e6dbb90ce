//! HTTP-level tests for `POST /api/learning-path`.

mod common;

use advisor_core::error::ModelError;
use advisor_core::generation::GenerationConfig;
use common::{body_json, build_test_app, post_json, FakeGenerator};
use serde_json::json;

#[tokio::test]
async fn missing_target_career_is_rejected() {
    let generator = FakeGenerator::replying("unused");
    let app = build_test_app(generator.clone());

    let json = body_json(post_json(app, "/api/learning-path", json!({ "targetCareer": "" })).await).await;

    assert_eq!(
        json,
        json!({ "response": "Please specify what career you're interested in!", "error": true })
    );
    assert!(generator.calls().is_empty());
}

#[tokio::test]
async fn roadmap_is_returned_as_learning_path() {
    let generator = FakeGenerator::replying("Step 1: Python");
    let app = build_test_app(generator.clone());

    let body = json!({
        "targetCareer": "Data Scientist",
        "timeline": "6 months",
        "learningStyle": "video courses",
        "budget": "under $100"
    });
    let json = body_json(post_json(app, "/api/learning-path", body).await).await;

    assert_eq!(json, json!({ "learningPath": "Step 1: Python", "error": false }));

    let call = &generator.calls()[0];
    assert!(call.prompt.contains("TARGET CAREER: \"Data Scientist\"\nCURRENT SKILLS: \"Starting from basics\"\n"));
    assert!(call.prompt.contains("LEARNING STYLE: video courses\nBUDGET: under $100\n"));
    assert_eq!(call.config, Some(GenerationConfig::learning_path()));
}

#[tokio::test]
async fn rate_limit_uses_learning_path_wording() {
    let app = build_test_app(FakeGenerator::failing(ModelError::RateLimited(String::new())));

    let json = body_json(
        post_json(app, "/api/learning-path", json!({ "targetCareer": "Pilot" })).await,
    )
    .await;

    assert_eq!(
        json,
        json!({ "response": "Too many requests. Please wait a moment and try again!", "error": true })
    );
}
