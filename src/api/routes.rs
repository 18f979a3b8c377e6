//! HTTP API route definitions.

use axum::http::Method;
use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{api_doc, DOCS_PATH, OPENAPI_PATH};
use super::handlers::{health, metrics, AppState};
use crate::metrics::track_http;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let AppState {
        metadata,
        metrics: prometheus,
        allowed_origins,
    } = state;

    let mut router = Router::new()
        // Health endpoint
        .route("/health", get(health))
        // API description and docs page
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api_doc(metadata)));

    if let Some(handle) = prometheus {
        router = router
            .merge(
                Router::new()
                    .route("/metrics", get(metrics))
                    .with_state(handle),
            )
            .layer(middleware::from_fn(track_http));
    }

    router
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: Vec<axum::http::HeaderValue>) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(origin)
}
