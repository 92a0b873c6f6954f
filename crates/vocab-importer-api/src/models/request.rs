//! リクエストモデル定義

use serde::Deserialize;

/// 語彙生成リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
  /// 語彙のトピック（未指定は None）
  #[serde(default)]
  pub topic: Option<String>,
}

impl GenerateRequest {
  /// トピックを取得（未指定は空文字列）
  #[must_use]
  pub fn topic(&self) -> &str {
    self.topic.as_deref().unwrap_or_default()
  }
}
