//! Application metadata.

use serde::Serialize;

/// Display name of the service.
pub const APP_TITLE: &str = "Fluxo de Caixa API";

/// Version published in the API description.
pub const APP_VERSION: &str = "1.0.0";

/// Name and version attached to the running service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppMetadata {
    /// Display name.
    pub title: &'static str,
    /// Version identifier.
    pub version: &'static str,
}

impl AppMetadata {
    /// Metadata for this build.
    pub const fn current() -> Self {
        Self {
            title: APP_TITLE,
            version: APP_VERSION,
        }
    }
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for AppMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.title, self.version)
    }
}
