//! 補完クライアント
//!
//! 語彙生成ロジックを上流サービスから切り離すための狭いインターフェース。

mod mistral;

use async_trait::async_trait;

use crate::errors::GenerationResult;

pub use mistral::MistralClient;

/// Sends one prompt to a text-completion service and returns the reply text.
///
/// Production uses [`MistralClient`]; tests swap in stubs so fence stripping
/// and parsing can be exercised without a network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
  /// Sends `prompt` as a single user message.
  ///
  /// # Errors
  /// [`GenerationError::Upstream`](crate::GenerationError::Upstream) on
  /// transport failure, non-success status, or an unexpected response body.
  async fn complete(&self, prompt: &str) -> GenerationResult<String>;
}
