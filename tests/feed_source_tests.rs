//! Feed transport tests against a mocked generative API
//!
//! These tests use wiremock to stand in for the `generateContent` endpoint and
//! check request shape, response validation and how the synchronizer reacts
//! to each failure mode.

#![cfg(feature = "server")]

use rejuvana::feed::gemini::GeminiFeedSource;
use rejuvana::feed::{FeedError, FeedSource, FeedSynchronizer, FEED_UNAVAILABLE_NOTICE};
use rejuvana::utils::config::FeedConfig;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

const MODEL_PATH: &str = "/v1beta/models/gemini-3-pro-preview:generateContent";

fn config_for(server: &MockServer) -> FeedConfig {
    FeedConfig {
        api_base: format!("{}/v1beta", server.uri()),
        timeout_secs: 1,
        ..FeedConfig::default()
    }
}

fn post_record(id: &str, timestamp: &str) -> serde_json::Value {
    json!({
        "id": id,
        "platform": "instagram",
        "user": "rejuvanaliving",
        "link": format!("https://www.instagram.com/p/{}/", id),
        "image": "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b",
        "caption": "Sunlight before screens.",
        "likes": "1.4k",
        "comments": 37,
        "timestamp": timestamp
    })
}

/// Wrap model output text in a generateContent response
fn mock_generate_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://www.instagram.com/rejuvanaliving/", "title": "instagram.com" } }
                ]
            }
        }]
    })
}

async fn mount(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============= Transport =============

#[tokio::test]
async fn test_fetch_sends_key_schema_and_grounding_tool() {
    let server = MockServer::start().await;
    let text = json!([
        post_record("older", "2025-03-10T08:00:00Z"),
        post_record("newer", "2025-03-12T08:00:00Z"),
    ])
    .to_string();

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "tools": [{ "google_search": {} }],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_generate_response(&text)))
        .expect(1)
        .mount(&server)
        .await;

    let source = GeminiFeedSource::new(&config_for(&server), "test-key".to_string()).unwrap();
    let batch = source.fetch_latest().await.unwrap();

    let ids: Vec<_> = batch.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["newer", "older"]);
    assert_eq!(batch.sources.len(), 1);
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(429).set_body_string("quota exceeded")).await;

    let source = GeminiFeedSource::new(&config_for(&server), "k".to_string()).unwrap();
    assert!(matches!(
        source.fetch_latest().await,
        Err(FeedError::Status(429))
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let source = GeminiFeedSource::new(&config_for(&server), "k".to_string()).unwrap();
    assert!(matches!(
        source.fetch_latest().await,
        Err(FeedError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_schema_violation_rejects_batch() {
    let server = MockServer::start().await;
    let mut bad = post_record("b", "2025-03-10T08:00:00Z");
    bad["platform"] = json!("tiktok");
    let text = json!([post_record("a", "2025-03-10T08:00:00Z"), bad]).to_string();
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(mock_generate_response(&text)),
    )
    .await;

    let source = GeminiFeedSource::new(&config_for(&server), "k".to_string()).unwrap();
    assert!(matches!(
        source.fetch_latest().await,
        Err(FeedError::Schema { index: 1, .. })
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(mock_generate_response("[]"))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let source = GeminiFeedSource::new(&config_for(&server), "k".to_string()).unwrap();
    assert!(matches!(
        source.fetch_latest().await,
        Err(FeedError::Timeout(_))
    ));
}

// ============= Synchronizer over HTTP =============

#[tokio::test]
async fn test_first_sync_failure_serves_fallback() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(500)).await;

    let config = config_for(&server);
    let source = GeminiFeedSource::new(&config, "k".to_string()).unwrap();
    let mut feed = FeedSynchronizer::new(config.account());

    assert!(feed.sync(&source, false).await);
    assert!(!feed.posts().is_empty());
    assert_eq!(feed.last_error(), Some(FEED_UNAVAILABLE_NOTICE));
    assert!(feed.last_synced_at().is_none());
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_posts() {
    let server = MockServer::start().await;
    let text = json!([
        post_record("a", "2025-03-12T08:00:00Z"),
        post_record("b", "2025-03-11T08:00:00Z"),
        post_record("c", "2025-03-10T08:00:00Z"),
    ])
    .to_string();

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_generate_response(&text)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount(&server, ResponseTemplate::new(503)).await;

    let config = config_for(&server);
    let source = GeminiFeedSource::new(&config, "k".to_string()).unwrap();
    let mut feed = FeedSynchronizer::new(config.account());

    feed.sync(&source, false).await;
    let synced_at = feed.last_synced_at();
    assert_eq!(feed.posts().len(), 3);

    feed.sync(&source, true).await;
    assert_eq!(feed.posts().len(), 3);
    assert_eq!(feed.posts()[0].id, "a");
    assert!(feed.last_error().is_some());
    assert_eq!(feed.last_synced_at(), synced_at);
}
