//! OpenAPI description of the service.

use utoipa::OpenApi;

use super::handlers::{self, HealthResponse};
use crate::meta::AppMetadata;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the Swagger UI page.
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health),
    components(schemas(HealthResponse)),
    tags((name = "health", description = "Service liveness"))
)]
struct ApiDoc;

/// Build the OpenAPI document, stamped with the given metadata.
pub fn api_doc(metadata: AppMetadata) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = metadata.title.to_string();
    doc.info.version = metadata.version.to_string();
    doc
}

/// Render the OpenAPI document as JSON. `compact` yields a single line.
pub fn render(metadata: AppMetadata, compact: bool) -> serde_json::Result<String> {
    let doc = api_doc(metadata);
    if compact {
        serde_json::to_string(&doc)
    } else {
        serde_json::to_string_pretty(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn info_carries_metadata() {
        let doc = api_doc(AppMetadata::current());
        assert_eq!(doc.info.title, "Fluxo de Caixa API");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn only_health_is_documented() {
        let doc = api_doc(AppMetadata::current());
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/health"]);
    }

    #[test]
    fn compact_render_is_one_line() {
        let rendered = render(AppMetadata::current(), true).unwrap();
        assert!(!rendered.contains('\n'));

        let pretty = render(AppMetadata::current(), false).unwrap();
        assert!(pretty.lines().count() > 1);

        let a: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn health_response_schema_is_registered() {
        let doc = api_doc(AppMetadata::current());
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("HealthResponse"));
    }
}
