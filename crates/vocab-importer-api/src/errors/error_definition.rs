//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use vocab_importer::GenerationError;

/// クライアントに返す固定メッセージ（トピック未指定）
pub(crate) const MSG_NO_TOPIC: &str = "No topic provided";

/// クライアントに返す固定メッセージ（上流エラー）
pub(crate) const MSG_GENERATION_FAILED: &str = "Failed to generate vocabulary";

/// クライアントに返す固定メッセージ（解析失敗）
pub(crate) const MSG_PARSE_FAILED: &str = "Failed to parse vocabulary";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// トピックが未指定
  MissingInput,
  /// 補完サービスの呼び出し失敗
  Upstream,
  /// 補完テキストの解析失敗
  MalformedResponse,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::MissingInput => "missing_input",
      Self::Upstream => "upstream_error",
      Self::MalformedResponse => "malformed_response",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MissingInput => StatusCode::BAD_REQUEST,
      Self::Upstream | Self::MalformedResponse | Self::Internal | Self::Config => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// トピックが未指定
  #[error("トピックが指定されていません")]
  MissingInput,

  /// 補完サービスの呼び出し失敗（詳細はログのみ）
  #[error("補完サービスエラー: {0}")]
  Upstream(String),

  /// 補完テキストの解析失敗（生テキストを保持）
  #[error("補完テキストを解析できません")]
  MalformedResponse {
    /// フェンス除去前の生テキスト
    raw: String,
  },

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::MissingInput => ApiErrorKind::MissingInput,
      Self::Upstream(_) => ApiErrorKind::Upstream,
      Self::MalformedResponse { .. } => ApiErrorKind::MalformedResponse,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// クライアントに返すメッセージ
  ///
  /// 上流エラーの詳細は返さない。
  fn public_message(&self) -> String {
    match self {
      Self::MissingInput => MSG_NO_TOPIC.to_string(),
      Self::Upstream(_) => MSG_GENERATION_FAILED.to_string(),
      Self::MalformedResponse { .. } => MSG_PARSE_FAILED.to_string(),
      Self::Internal(_) | Self::Config(_) => self.to_string(),
    }
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
  error: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  raw_response: Option<String>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let error = self.public_message();
    let raw_response = match self {
      Self::MalformedResponse { raw } => Some(raw),
      _ => None,
    };

    (status, Json(ErrorResponse { error, raw_response })).into_response()
  }
}

/// GenerationError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<GenerationError> for ApiError {
  fn from(err: GenerationError) -> Self {
    match err {
      GenerationError::MissingInput => ApiError::MissingInput,
      GenerationError::Upstream { .. } => ApiError::Upstream(err.to_string()),
      GenerationError::MalformedResponse { raw, .. } => ApiError::MalformedResponse { raw },
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
