use career_match::config::CorsConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The front-end runs on its own origin and posts JSON, so preflight must pass.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = match config {
        CorsConfig::AnyOrigin => AllowOrigin::any(),
        CorsConfig::Origins(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
