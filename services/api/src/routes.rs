use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use career_match::analysis::{AnalyzeRequest, AnalyzeResponse};
use career_match::error::AppError;
use career_match::matching::CareerMatcher;
use serde_json::json;
use tracing::info;

pub(crate) fn app_router() -> Router {
    analysis_router()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

/// The front-end posts to `/api/analyze/`; the bare path is accepted as well.
pub(crate) fn analysis_router() -> Router {
    Router::new()
        .route("/api/analyze/", get(analyze_status).post(analyze_endpoint))
        .route("/api/analyze", get(analyze_status).post(analyze_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_status() -> Json<serde_json::Value> {
    Json(json!({ "status": "Career AI backend running" }))
}

pub(crate) async fn analyze_endpoint(body: Bytes) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = AnalyzeRequest::from_slice(&body)?;
    let response = request.analyze(&CareerMatcher::standard());

    info!(
        skills = request.skills.len(),
        experience = %request.experience,
        education = %request.education,
        top_match = response.careers.first().map(|career| career.id.as_str()),
        "analyzed career profile"
    );

    Ok(Json(response))
}
