//! API State Definition

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::VocabApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service; neither is mutated after startup.
#[derive(Clone)]
pub struct AppState {
  /// Server configuration
  pub config: ServerConfig,
  /// Vocabulary Generation Service
  ///
  /// - Production: `Arc::new(VocabApiServiceFull::new(completion))`
  /// - Test: `Arc::new(VocabApiServiceFull::with_client(stub))`
  pub service: Arc<dyn VocabApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: ServerConfig, service: Arc<dyn VocabApiService>) -> Self {
    Self { config, service }
  }
}
