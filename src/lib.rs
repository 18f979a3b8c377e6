//! Fluxo de Caixa API service shell.
//!
//! Builds a named, versioned HTTP application exposing a single liveness
//! endpoint:
//!
//! ```text
//! GET /health  ->  200 {"status":"ok"}
//! ```
//!
//! The title and version are published through the OpenAPI description at
//! `/openapi.json`, browsable at `/docs`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`meta`]: Application title and version
//! - [`api`]: HTTP API for health, docs, and metrics
//! - [`metrics`]: Prometheus request metrics
//! - [`server`]: Listener binding and graceful serving
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod meta;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use meta::AppMetadata;
