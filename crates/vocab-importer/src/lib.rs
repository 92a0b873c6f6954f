//! vocab-importer 語彙生成ライブラリー
//!
//! トピックから日本語の語彙リストを LLM の chat-completion API で生成する

/// 設定モジュール - 補完 API の接続設定を定義
pub mod config;

/// 補完クライアントモジュール - CompletionClient トレイトと Mistral 実装
pub mod completion;

/// エラーモジュール - GenerationError, GenerationResult 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - VocabularyWord, WordPart 等のデータ構造を定義
pub mod models;

/// プロンプトモジュール - 語彙生成の指示文テンプレート
pub mod prompt;

/// サニタイズモジュール - 補完テキストから Markdown のコードフェンスを除去する
pub mod sanitizer;

/// サービスモジュール - VocabularyGenerator 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use completion::{CompletionClient, MistralClient};
pub use config::CompletionConfig;
pub use errors::{GenerationError, GenerationResult};
pub use models::{VocabularyWord, WordList, WordPart};
pub use service::VocabularyGenerator;
