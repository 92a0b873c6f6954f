//! Config loading from environment variables

use std::path::PathBuf;

use vocab_importer::CompletionConfig;
use vocab_importer::config::{DEFAULT_COMPLETION_ENDPOINT, DEFAULT_COMPLETION_MODEL};

use super::constants::{
  DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, ENV_API_KEY, ENV_API_URL, ENV_HOST, ENV_MODEL,
  ENV_PORT, ENV_STATIC_DIR,
};
use crate::errors::ApiError;

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
  /// Bind address (e.g. "0.0.0.0:5000")
  pub bind_addr: String,
  /// Root directory of the static front-end assets
  pub static_dir: PathBuf,
}

/// API Server Configuration
///
/// Read once at startup; nothing mutates it afterwards.
#[derive(Debug)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:5000")
  pub bind_addr: String,
  /// Root directory of the static front-end assets
  pub static_dir: PathBuf,
  /// Upstream completion service settings
  pub completion: CompletionConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if `PORT` is not a valid port or the API key is missing
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Empty values are treated as unset.
  ///
  /// # Errors
  /// Same as [`Config::from_env`]
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let port = match get(ENV_PORT) {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| ApiError::config(format!("Invalid {ENV_PORT} '{raw}': {e}")))?,
      None => DEFAULT_PORT,
    };
    let host = get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

    let api_key =
      get(ENV_API_KEY).ok_or_else(|| ApiError::config(format!("{ENV_API_KEY} is not set")))?;

    let completion = CompletionConfig::new(api_key)
      .with_endpoint(get(ENV_API_URL).unwrap_or_else(|| DEFAULT_COMPLETION_ENDPOINT.to_string()))
      .with_model(get(ENV_MODEL).unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()));

    let static_dir = PathBuf::from(get(ENV_STATIC_DIR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

    Ok(Self {
      bind_addr: format!("{host}:{port}"),
      static_dir,
      completion,
    })
  }

  /// Splits into the server settings and the completion settings
  #[must_use]
  pub fn into_parts(self) -> (ServerConfig, CompletionConfig) {
    (
      ServerConfig {
        bind_addr: self.bind_addr,
        static_dir: self.static_dir,
      },
      self.completion,
    )
  }
}
