//! Mistral chat-completions クライアント

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompletionClient;
use crate::config::CompletionConfig;
use crate::errors::{GenerationError, GenerationResult};

/// チャットメッセージ（リクエスト側）
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

/// chat-completions リクエストボディ
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
  model: &'a str,
  messages: [ChatMessage<'a>; 1],
}

/// chat-completions レスポンスボディ（必要なフィールドのみ）
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
  #[serde(default)]
  content: Option<String>,
}

/// Mistral 互換の chat-completions API クライアント
///
/// タイムアウトやリトライは設定しない（reqwest のデフォルトのまま）。
#[derive(Debug)]
pub struct MistralClient {
  http: Client,
  config: CompletionConfig,
}

impl MistralClient {
  /// クライアントを作成する
  #[must_use]
  pub fn new(config: CompletionConfig) -> Self {
    Self {
      http: Client::new(),
      config,
    }
  }

  /// 送信先エンドポイント
  #[must_use]
  pub fn endpoint(&self) -> &str {
    &self.config.endpoint
  }

  /// 使用するモデル識別子
  #[must_use]
  pub fn model(&self) -> &str {
    &self.config.model
  }
}

#[async_trait]
impl CompletionClient for MistralClient {
  async fn complete(&self, prompt: &str) -> GenerationResult<String> {
    let body = ChatCompletionRequest {
      model: &self.config.model,
      messages: [ChatMessage {
        role: "user",
        content: prompt,
      }],
    };

    debug!(endpoint = %self.config.endpoint, model = %self.config.model, "補完リクエストを送信");

    let response = self
      .http
      .post(&self.config.endpoint)
      .bearer_auth(self.config.api_key.expose_secret())
      .json(&body)
      .send()
      .await
      .map_err(|e| GenerationError::upstream(None, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      // 上流のエラーペイロードをそのまま詳細として保持する
      let payload = response.text().await.unwrap_or_default();
      let detail = if payload.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
      } else {
        payload
      };
      return Err(GenerationError::upstream(Some(status.as_u16()), detail));
    }

    let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
      GenerationError::upstream(
        Some(status.as_u16()),
        format!("invalid completion body: {e}"),
      )
    })?;

    parsed
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .ok_or_else(|| {
        GenerationError::upstream(
          Some(status.as_u16()),
          "completion has no message content",
        )
      })
  }
}
