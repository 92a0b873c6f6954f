//! エラー定義

use std::sync::Arc;
use thiserror::Error;

/// 語彙生成のエラー
///
/// 1 リクエストの処理中に発生しうる失敗はこの3種類のいずれかに分類される。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum GenerationError {
  /// トピックが指定されていない（空文字列を含む）
  #[error("トピックが指定されていません")]
  MissingInput,

  /// 補完サービスに到達できない、または成功以外のステータスが返った
  #[error("補完サービスの呼び出しに失敗しました: status={status:?}, detail={detail}")]
  Upstream {
    /// 上流の HTTP ステータス（通信エラーの場合は None）
    status: Option<u16>,
    /// 上流のエラーペイロード、または通信エラーのメッセージ
    detail: String,
  },

  /// 補完テキストを JSON 配列として解釈できなかった
  #[error("補完テキストを JSON として解析できません: {source}")]
  MalformedResponse {
    /// フェンス除去前の生テキスト
    raw: String,
    /// serde_json のパースエラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

impl GenerationError {
  /// 上流エラーを作成
  #[must_use]
  pub fn upstream(status: Option<u16>, detail: impl Into<String>) -> Self {
    Self::Upstream {
      status,
      detail: detail.into(),
    }
  }

  /// 解析失敗エラーを作成
  #[must_use]
  pub fn malformed(raw: impl Into<String>, source: serde_json::Error) -> Self {
    Self::MalformedResponse {
      raw: raw.into(),
      source: Arc::new(source),
    }
  }
}

/// Result 型エイリアス
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
