// crates/vocab-importer/src/models/model_definition.rs

use serde::{Deserialize, Serialize};

/// Parsed word list as returned by the completion service.
///
/// Elements are kept as raw JSON values: the array is relayed to the caller
/// without checking each element against [`VocabularyWord`].
pub type WordList = Vec<serde_json::Value>;

/// One vocabulary entry in the shape the prompt asks the model to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
  /// Kanji spelling of the whole word
  pub kanji: String,
  /// Romaji transliteration of the whole word
  pub romaji: String,
  /// English translation
  pub english: String,
  /// Per-character breakdown, in reading order
  pub parts: Vec<WordPart>,
}

/// A single kanji character of a [`VocabularyWord`] and its possible readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPart {
  /// One kanji character
  pub kanji: String,
  /// Alternative romaji readings of the character
  pub romaji: Vec<String>,
}

impl VocabularyWord {
  /// Placeholder entry describing each field in prose.
  ///
  /// Rendered into the prompt so the model sees the exact JSON shape expected.
  #[must_use]
  pub fn schema_example() -> Self {
    Self {
      kanji: "Japanese kanji representation".to_string(),
      romaji: "romaji transliteration".to_string(),
      english: "English translation".to_string(),
      parts: vec![WordPart {
        kanji: "individual kanji character".to_string(),
        romaji: vec!["possible romaji readings".to_string()],
      }],
    }
  }
}
