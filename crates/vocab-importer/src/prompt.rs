//! 語彙生成プロンプト

use crate::models::VocabularyWord;

/// 1 回の生成で要求する語彙数
pub const WORD_COUNT: usize = 10;

/// トピックから補完サービスへの指示文を組み立てる
///
/// 出力形式はテンプレート内の JSON 例のみで伝える（スキーマ検証はしない）。
#[must_use]
pub fn build_prompt(topic: &str) -> String {
  // 構造体から生成するのでシリアライズは失敗しない
  let example = serde_json::to_string_pretty(&VocabularyWord::schema_example()).unwrap_or_default();

  format!(
    "For the topic \"{topic}\", generate a list of {WORD_COUNT} vocabulary words in JSON format.\n\
     Each word should have the following structure:\n\
     {example}\n\
     Provide the response as a JSON array of these word objects."
  )
}
