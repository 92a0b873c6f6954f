// crates/vocab-importer/src/service.rs

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::completion::CompletionClient;
use crate::errors::{GenerationError, GenerationResult};
use crate::models::WordList;
use crate::prompt::build_prompt;
use crate::sanitizer::strip_code_fences;

/// Turns a topic into a vocabulary list through a [`CompletionClient`].
///
/// Holds no per-request state, so one instance is shared by every request.
#[derive(Clone)]
pub struct VocabularyGenerator {
  client: Arc<dyn CompletionClient>,
}

impl VocabularyGenerator {
  /// Creates a generator backed by `client`.
  pub fn new(client: Arc<dyn CompletionClient>) -> Self {
    Self { client }
  }

  /// Generates the word list for `topic`.
  ///
  /// All-or-nothing: either the whole parsed array or an error.
  ///
  /// # Errors
  /// - [`GenerationError::MissingInput`] if `topic` is empty (no upstream call is made)
  /// - [`GenerationError::Upstream`] if the completion service fails
  /// - [`GenerationError::MalformedResponse`] if the reply is not a JSON array
  ///   after fence stripping; carries the unmodified reply
  pub async fn generate(&self, topic: &str) -> GenerationResult<WordList> {
    if topic.is_empty() {
      return Err(GenerationError::MissingInput);
    }

    let prompt = build_prompt(topic);
    debug!(topic, prompt_len = prompt.len(), "generating vocabulary");

    let raw = self.client.complete(&prompt).await.inspect_err(|e| {
      if let GenerationError::Upstream { status, detail } = e {
        error!(?status, detail = %detail, "error generating vocabulary");
      }
    })?;

    let words = parse_word_list(raw)?;
    info!(topic, word_count = words.len(), "vocabulary generated");

    Ok(words)
  }
}

/// Strips code fences from `raw` and parses the rest as a JSON array.
///
/// # Errors
/// [`GenerationError::MalformedResponse`] holding `raw` as received.
pub fn parse_word_list(raw: String) -> GenerationResult<WordList> {
  let cleaned = strip_code_fences(&raw);

  match serde_json::from_str::<WordList>(&cleaned) {
    Ok(words) => Ok(words),
    Err(e) => {
      error!(error = %e, "failed to parse vocabulary JSON");
      error!(raw_response = %raw, "raw completion text");
      Err(GenerationError::malformed(raw, e))
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use async_trait::async_trait;

  use super::*;

  /// 固定の応答を返すスタブ（呼び出し回数を記録する）
  struct StubClient {
    reply: GenerationResult<String>,
    calls: AtomicUsize,
  }

  impl StubClient {
    fn new(reply: GenerationResult<String>) -> Arc<Self> {
      Arc::new(Self {
        reply,
        calls: AtomicUsize::new(0),
      })
    }
  }

  #[async_trait]
  impl CompletionClient for StubClient {
    async fn complete(&self, _prompt: &str) -> GenerationResult<String> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.reply.clone()
    }
  }

  fn generator(stub: &Arc<StubClient>) -> VocabularyGenerator {
    VocabularyGenerator::new(stub.clone())
  }

  #[tokio::test]
  async fn empty_topic_is_rejected_without_calling_upstream() {
    let stub = StubClient::new(Ok("[]".to_string()));
    let result = generator(&stub).generate("").await;

    assert!(matches!(result, Err(GenerationError::MissingInput)));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn fenced_reply_is_parsed() {
    let reply = "```json\n[{\"kanji\":\"食\",\"romaji\":\"ta\",\"english\":\"eat\",\"parts\":[{\"kanji\":\"食\",\"romaji\":[\"ta\",\"shoku\"]}]}]\n```";
    let stub = StubClient::new(Ok(reply.to_string()));

    let words = generator(&stub).generate("food").await.unwrap();

    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
      words,
      vec![serde_json::json!({
        "kanji": "食",
        "romaji": "ta",
        "english": "eat",
        "parts": [{ "kanji": "食", "romaji": ["ta", "shoku"] }]
      })]
    );
  }

  #[tokio::test]
  async fn unparseable_reply_keeps_original_text() {
    let reply = "```json\nSorry, I cannot help with that.\n```";
    let stub = StubClient::new(Ok(reply.to_string()));

    let err = generator(&stub).generate("food").await.unwrap_err();

    match err {
      GenerationError::MalformedResponse { raw, .. } => assert_eq!(raw, reply),
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[tokio::test]
  async fn json_object_reply_is_malformed() {
    let stub = StubClient::new(Ok(r#"{"words": []}"#.to_string()));
    let err = generator(&stub).generate("food").await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse { .. }));
  }

  #[tokio::test]
  async fn upstream_error_is_propagated() {
    let stub = StubClient::new(Err(GenerationError::upstream(Some(401), "Unauthorized")));
    let err = generator(&stub).generate("food").await.unwrap_err();

    match err {
      GenerationError::Upstream { status, detail } => {
        assert_eq!(status, Some(401));
        assert_eq!(detail, "Unauthorized");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn parse_word_list_without_fences() {
    let words = parse_word_list("[1, 2]".to_string()).unwrap();
    assert_eq!(words.len(), 2);
  }
}
