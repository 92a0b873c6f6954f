//! vocab-importer-api crate
//!
//! Web server generating Japanese vocabulary lists for a topic over HTTP API.
//!
//! ## Endpoints
//! - `POST /generate` - Vocabulary generation
//! - `GET /health` - Health Check
//! - `GET /` and other paths - Static front-end assets
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/generate \
//!   -H "Content-Type: application/json" \
//!   -d '{"topic": "cooking"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{GenerateRequest, GenerateResponse};
pub use service::VocabApiServiceFull;
