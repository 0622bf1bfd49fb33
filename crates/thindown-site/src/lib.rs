//! Read-only JSON API for the THINDOWN® site.
//!
//! Serves the static catalog and the form schemas. Nothing here writes; the
//! contact and sample-request endpoints that forms post to live elsewhere.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", thindown_site::api_router())
//! ```

pub mod catalog;
pub mod error;
pub mod schema;

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `THINDOWN_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
  fn default() -> Self { Self { host: default_host(), port: default_port() } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API routes, unprefixed.
pub fn api_router() -> Router {
  Router::new()
    // Catalog
    .route("/products", get(catalog::products))
    .route("/products/{id}", get(catalog::product))
    .route("/applications", get(catalog::applications))
    .route("/applications/{id}", get(catalog::application))
    .route("/features", get(catalog::features))
    .route("/certifications", get(catalog::certifications))
    // Forms
    .route("/forms/{form}/schema", get(schema::handler))
}

/// The full application: [`api_router`] under `/api`, with request tracing.
pub fn app() -> Router {
  Router::new()
    .nest("/api", api_router())
    .layer(TraceLayer::new_for_http())
}
