// file: tests/openai_client.rs
// description: wire-level tests for the OpenAI completion client

use digithesis_ai::completion::{CompletionClient, OpenAiClient};
use digithesis_ai::{OpenAiConfig, ServiceError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str, timeout_secs: u64) -> OpenAiConfig {
    OpenAiConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
        timeout_secs,
        ..OpenAiConfig::default()
    }
}

#[tokio::test]
async fn complete_returns_trimmed_message_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 300
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": "  Score: 90. Reads as original work.  "
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&test_config(&server.uri(), 30)).unwrap();
    let reply = client
        .complete("system instructions", "user prompt")
        .await
        .unwrap();
    assert_eq!(reply, "Score: 90. Reads as original work.");
}

#[tokio::test]
async fn non_success_status_becomes_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit reached"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&test_config(&server.uri(), 30)).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    match err {
        ServiceError::Upstream(message) => {
            assert!(message.contains("429"), "message: {}", message);
            assert!(message.contains("Rate limit reached"), "message: {}", message);
        }
        other => panic!("expected Upstream error, got: {:?}", other),
    }
}

#[tokio::test]
async fn empty_choices_becomes_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&test_config(&server.uri(), 30)).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, ServiceError::Upstream(_)));
}

#[tokio::test]
async fn slow_upstream_becomes_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&test_config(&server.uri(), 1)).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, ServiceError::UpstreamTimeout(_)));
}
