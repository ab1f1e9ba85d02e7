use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;

fn test_client(server: &MockServer) -> LlmClient {
    LlmClient::new("test-key".to_owned(), server.uri())
        .unwrap()
        .with_model("test-model".to_owned())
}

fn test_request() -> ChatRequest {
    ChatRequest {
        model: "test-model".to_owned(),
        messages: vec![Message { role: "user".to_owned(), content: "hello".to_owned() }],
        max_tokens: 100,
        temperature: 0.7,
    }
}

fn content_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    }))
}

#[tokio::test]
async fn success_on_first_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(content_response("test response"))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await.unwrap();
    assert_eq!(result, "test response");
}

#[tokio::test]
async fn content_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(content_response("  padded  "))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await.unwrap();
    assert_eq!(result, "padded");
}

#[tokio::test]
async fn retry_recovers_after_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(content_response("success after retry"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let result =
        test_client(&server).chat_completion_with_retry(&test_request(), 1).await.unwrap();
    assert_eq!(result, "success after retry");
}

#[tokio::test]
async fn single_retry_budget_makes_exactly_two_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(2)
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion_with_retry(&test_request(), 1).await;
    let err = result.unwrap_err();
    assert!(matches!(err, LlmError::RetriesExhausted(_)));
    let msg = err.to_string();
    assert!(msg.contains("503"));
    assert!(msg.contains("Service Unavailable"));
}

#[tokio::test]
async fn plain_completion_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::Status { code: 429, .. })));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::Parse { .. })));
}

#[tokio::test]
async fn empty_choices_array_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::NoChoices)));
}

#[tokio::test]
async fn missing_choices_key_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::NoChoices)));
}

#[tokio::test]
async fn missing_content_field_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"choices": [{"message": {}}]})),
        )
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::MissingField(field)) if field == "content"));
}

#[tokio::test]
async fn blank_content_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(content_response("   "))
        .mount(&server)
        .await;

    let result = test_client(&server).chat_completion(&test_request()).await;
    assert!(matches!(result, Err(LlmError::EmptyContent)));
}

#[test]
fn truncate_respects_char_boundaries() {
    use crate::client::truncate;

    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello world", 5), "hello");
    let result = truncate("привет", 4);
    assert!(result.len() <= 4);
    assert_eq!(truncate("", 10), "");
}
