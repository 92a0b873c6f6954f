//! HTTPハンドラー定義

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{GenerateRequest, GenerateResponse};

use super::state::AppState;

/// POST /generate エンドポイント
///
/// トピックに沿った日本語の語彙リストを生成する。
///
/// # Request Body
/// ```json
/// { "topic": "cooking" }
/// ```
///
/// # Response
/// - 200 OK: `{ "words": [...] }`
/// - 400 Bad Request: トピック未指定
/// - 500 Internal Server Error: 上流エラー、または補完テキストの解析失敗
pub async fn post_generate(
  State(state): State<AppState>,
  payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
  // JSON として読めないボディはトピック未指定と同じ扱い
  let request = match payload {
    Ok(Json(request)) => request,
    Err(rejection) => {
      debug!(error = %rejection, "リクエストボディを解釈できません");
      GenerateRequest::default()
    }
  };

  debug!(topic = request.topic(), "語彙生成リクエストを受信");

  let response = state.service.generate(request).await?;

  info!(word_count = response.words.len(), "語彙生成完了");

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
