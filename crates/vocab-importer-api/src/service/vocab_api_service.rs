//! Vocabulary Generation Service

use std::sync::Arc;

use async_trait::async_trait;
use vocab_importer::{CompletionClient, CompletionConfig, MistralClient, VocabularyGenerator};

use crate::errors::Result;
use crate::models::{GenerateRequest, GenerateResponse};

/// Common interface for vocabulary generation service
///
/// This trait allows swapping production implementation (`VocabApiServiceFull`) with
/// test stubs/mocks.
#[async_trait]
pub trait VocabApiService: Send + Sync {
  /// Generates the vocabulary list for the requested topic
  ///
  /// # Errors
  /// - Missing topic
  /// - Upstream failure
  /// - Unparseable completion text
  async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Vocabulary Generation Service
///
/// Thin adapter from the HTTP models to [`VocabularyGenerator`].
#[derive(Clone)]
pub struct VocabApiServiceFull {
  generator: VocabularyGenerator,
}

impl VocabApiServiceFull {
  /// Initializes the service with the Mistral client
  ///
  /// # Arguments
  /// * `completion` - Upstream completion settings (endpoint, model, API key)
  #[must_use]
  pub fn new(completion: CompletionConfig) -> Self {
    Self::with_client(Arc::new(MistralClient::new(completion)))
  }

  /// Initializes the service with an arbitrary completion client
  #[must_use]
  pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
    Self {
      generator: VocabularyGenerator::new(client),
    }
  }
}

/// Production implementation of trait `VocabApiService`
#[async_trait]
impl VocabApiService for VocabApiServiceFull {
  async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
    let words = self.generator.generate(request.topic()).await?;
    Ok(GenerateResponse { words })
  }
}
