//! models module
pub mod model_definition;

pub use model_definition::{VocabularyWord, WordList, WordPart};
