//! Service module

mod vocab_api_service;

pub use vocab_api_service::{VocabApiService, VocabApiServiceFull};
