//! HTTP API handlers.

use axum::{extract::State, Json};
use axum::http::HeaderValue;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::meta::AppMetadata;

/// Application state shared with the router.
#[derive(Clone)]
pub struct AppState {
    /// Title and version published in the API description.
    pub metadata: AppMetadata,
    /// Prometheus handle. `None` leaves `/metrics` unmounted.
    pub metrics: Option<PrometheusHandle>,
    /// Allowed CORS origins. Empty allows any origin.
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    /// Create new app state without metrics.
    pub fn new() -> Self {
        Self {
            metadata: AppMetadata::current(),
            metrics: None,
            allowed_origins: Vec::new(),
        }
    }

    /// Attach a Prometheus handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Restrict CORS to the given origins.
    pub fn with_allowed_origins(mut self, origins: Vec<HeaderValue>) -> Self {
        self.allowed_origins = origins;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl HealthResponse {
    /// The only response this service gives while it is alive.
    pub const OK: Self = Self { status: "ok" };
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}

/// Prometheus exposition handler.
pub async fn metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_to_single_field() {
        let body = serde_json::to_string(&HealthResponse::OK).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn health_is_stable_across_calls() {
        let Json(first) = health().await;
        let Json(second) = health().await;
        assert_eq!(first, second);
        assert_eq!(first, HealthResponse::OK);
    }

    #[test]
    fn app_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.metadata, AppMetadata::current());
        assert!(state.metrics.is_none());
        assert!(state.allowed_origins.is_empty());
    }
}
