//! HTTP API module for health, docs, and metrics endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::{api_doc, render as render_openapi};
pub use handlers::{AppState, HealthResponse};
pub use routes::create_router;
