//! API設定の定数定義

/// デフォルトの待ち受けアドレス
///
/// 全インターフェースで待ち受ける。
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 5000;

/// デフォルトの静的ファイルのルート
///
/// ワークスペースのルートから起動することを想定した相対パス。
pub const DEFAULT_STATIC_DIR: &str = "crates/vocab-importer-api/static";

/// ポート番号の環境変数名
pub const ENV_PORT: &str = "PORT";

/// 待ち受けアドレスの環境変数名
pub const ENV_HOST: &str = "HOST";

/// 補完 API の認証キーの環境変数名
pub const ENV_API_KEY: &str = "MISTRAL_API_KEY";

/// 補完 API のエンドポイントの環境変数名
pub const ENV_API_URL: &str = "MISTRAL_API_URL";

/// 補完モデル名の環境変数名
pub const ENV_MODEL: &str = "MISTRAL_MODEL";

/// 静的ファイルのルートの環境変数名
pub const ENV_STATIC_DIR: &str = "VOCAB_STATIC_DIR";
