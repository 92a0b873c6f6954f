//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATIC_DIR, ENV_API_KEY, ENV_API_URL, ENV_HOST, ENV_MODEL,
  ENV_PORT, ENV_STATIC_DIR,
};
pub use env::{Config, ServerConfig};
