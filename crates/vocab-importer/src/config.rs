// crates/vocab-importer/src/config.rs

use secrecy::Secret;

/// Default chat-completion endpoint (Mistral La Plateforme).
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

/// Default model identifier sent with every completion request.
pub const DEFAULT_COMPLETION_MODEL: &str = "mistral-small-latest";

/// Connection settings for the upstream completion service.
///
/// Built once at startup and moved into the client; never mutated afterwards.
#[derive(Debug)]
pub struct CompletionConfig {
  /// Full URL of the chat-completions endpoint
  pub endpoint: String,
  /// Model identifier (e.g. `mistral-small-latest`)
  pub model: String,
  /// Bearer credential
  ///
  /// Wrapped in [`Secret`] so it is redacted from `Debug` output.
  pub api_key: Secret<String>,
}

impl CompletionConfig {
  /// Creates a config for the default endpoint and model.
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      endpoint: DEFAULT_COMPLETION_ENDPOINT.to_string(),
      model: DEFAULT_COMPLETION_MODEL.to_string(),
      api_key: Secret::new(api_key.into()),
    }
  }

  /// Overrides the endpoint URL.
  #[must_use]
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  /// Overrides the model identifier.
  #[must_use]
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }
}
