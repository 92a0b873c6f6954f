//! vocab-importer-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vocab_importer_api::ApiError;
use vocab_importer_api::api::AppState;
use vocab_importer_api::api::run_server;
use vocab_importer_api::config::Config;
use vocab_importer_api::service::VocabApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env があれば読み込む（無くてもよい）
  let dotenv = dotenvy::dotenv();

  // ロギングの初期化
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  if let Ok(path) = dotenv {
    tracing::debug!(path = %path.display(), ".env を読み込みました");
  }

  // 設定の読み込み
  let config = Config::from_env().inspect_err(|e| tracing::error!(error = %e, "設定の読み込みに失敗しました"))?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    model = %config.completion.model,
    static_dir = %config.static_dir.display(),
    "設定を読み込みました"
  );

  // サービスの初期化（設定は補完クライアントへ移動する）
  let (config, completion) = config.into_parts();
  let service = Arc::new(VocabApiServiceFull::new(completion));
  tracing::info!("語彙生成サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
