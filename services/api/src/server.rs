use crate::cli::ServeArgs;
use crate::infra::{cors_layer, AppState};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::matching::catalog;
use career_match::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = app_router()
        .layer(Extension(app_state))
        .layer(cors_layer(&config.cors))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    // Build the catalog before accepting traffic.
    let profiles = catalog().len();
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, profiles, "career match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
