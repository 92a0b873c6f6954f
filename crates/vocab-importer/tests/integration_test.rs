//! MistralClient と VocabularyGenerator の結合テスト
//!
//! wiremock のモックサーバーを上流 API として使うため、ネットワーク接続は不要。

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vocab_importer::{
  CompletionClient, CompletionConfig, GenerationError, MistralClient, VocabularyGenerator,
  VocabularyWord,
};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn client_for(server: &MockServer) -> MistralClient {
  let config = CompletionConfig::new("test-key")
    .with_endpoint(format!("{}{}", server.uri(), COMPLETIONS_PATH))
    .with_model("mistral-small-latest");
  MistralClient::new(config)
}

fn completion_body(content: &str) -> serde_json::Value {
  json!({
    "id": "cmpl-test",
    "object": "chat.completion",
    "choices": [{
      "index": 0,
      "message": { "role": "assistant", "content": content },
      "finish_reason": "stop"
    }]
  })
}

// ============================================================================
// MistralClient
// ============================================================================

#[tokio::test]
async fn complete_sends_bearer_and_single_user_message() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .and(header("authorization", "Bearer test-key"))
    .and(body_partial_json(json!({
      "model": "mistral-small-latest",
      "messages": [{ "role": "user", "content": "hello" }]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[]")))
    .expect(1)
    .mount(&server)
    .await;

  let text = client_for(&server).complete("hello").await.expect("completion should succeed");
  assert_eq!(text, "[]");
}

#[tokio::test]
async fn complete_carries_upstream_error_payload() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .respond_with(
      ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized", "request_id": "r1" })),
    )
    .mount(&server)
    .await;

  let err = client_for(&server).complete("hello").await.unwrap_err();

  match err {
    GenerationError::Upstream { status, detail } => {
      assert_eq!(status, Some(401));
      assert!(detail.contains("Unauthorized"), "detail was: {detail}");
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

#[tokio::test]
async fn complete_empty_error_body_falls_back_to_reason() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let err = client_for(&server).complete("hello").await.unwrap_err();

  match err {
    GenerationError::Upstream { status, detail } => {
      assert_eq!(status, Some(503));
      assert_eq!(detail, "Service Unavailable");
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

#[tokio::test]
async fn complete_without_choices_is_upstream_error() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
    .mount(&server)
    .await;

  let err = client_for(&server).complete("hello").await.unwrap_err();
  assert!(matches!(err, GenerationError::Upstream { status: Some(200), .. }));
}

#[tokio::test]
async fn complete_unreachable_server_is_transport_error() {
  // ポート 1 は待ち受けがないため接続が拒否される
  let client = MistralClient::new(
    CompletionConfig::new("test-key").with_endpoint(format!("http://127.0.0.1:1{COMPLETIONS_PATH}")),
  );

  let err = client.complete("hello").await.unwrap_err();

  match err {
    GenerationError::Upstream { status, detail } => {
      assert_eq!(status, None);
      assert!(!detail.is_empty());
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

// ============================================================================
// VocabularyGenerator + MistralClient
// ============================================================================

#[tokio::test]
async fn generate_end_to_end_with_fenced_reply() {
  let server = MockServer::start().await;

  let content = "```json\n[{\"kanji\":\"食\",\"romaji\":\"ta\",\"english\":\"eat\",\"parts\":[{\"kanji\":\"食\",\"romaji\":[\"ta\",\"shoku\"]}]}]\n```";

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
    .expect(1)
    .mount(&server)
    .await;

  let generator = VocabularyGenerator::new(Arc::new(client_for(&server)));
  let words = generator.generate("food").await.expect("generation should succeed");

  assert_eq!(words.len(), 1);
  let word: VocabularyWord = serde_json::from_value(words[0].clone()).expect("typed word");
  assert_eq!(word.kanji, "食");
  assert_eq!(word.parts[0].romaji, vec!["ta", "shoku"]);
}

#[tokio::test]
async fn generate_prompt_names_topic() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path(COMPLETIONS_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[]")))
    .mount(&server)
    .await;

  let generator = VocabularyGenerator::new(Arc::new(client_for(&server)));
  let words = generator.generate("travel").await.expect("generation should succeed");
  assert!(words.is_empty());

  let requests = server.received_requests().await.expect("request recording enabled");
  assert_eq!(requests.len(), 1);
  let body: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("json body");
  let prompt = body["messages"][0]["content"].as_str().expect("prompt string");
  assert!(prompt.contains("\"travel\""));
}
