//! Response Model Definition

use serde::Serialize;
use vocab_importer::WordList;

/// Vocabulary Generation Response
///
/// `words` is the array parsed from the completion text, relayed as-is.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
  /// Generated words
  pub words: WordList,
}
