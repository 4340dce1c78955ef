use crate::analysis::RequestError;
use crate::config::ConfigError;
use crate::matching::CatalogError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Request(RequestError),
    Catalog(CatalogError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Request(_) | AppError::Catalog(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Request(err) => write!(f, "request error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Request(err) => Some(err),
            AppError::Catalog(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Client errors carry the bare message the front-end displays.
        let message = match &self {
            AppError::Request(err) => err.to_string(),
            AppError::Catalog(err) => err.to_string(),
            _ => self.to_string(),
        };
        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RequestError> for AppError {
    fn from(value: RequestError) -> Self {
        Self::Request(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn error_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn request_errors_map_to_bad_request_with_bare_message() {
        let response = AppError::from(RequestError::SkillsNotList).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = error_body(response).await;
        assert_eq!(payload["error"], "'skills' must be a list");
    }

    #[tokio::test]
    async fn infrastructure_errors_map_to_internal_error() {
        let response = AppError::from(ConfigError::InvalidPort).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = error_body(response).await;
        assert_eq!(
            payload["error"],
            "configuration error: APP_PORT must be a valid u16"
        );
    }

    #[test]
    fn catalog_errors_are_client_errors() {
        let err = AppError::from(CatalogError::UnknownProfile("astronaut".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "catalog error: unknown career profile 'astronaut'"
        );
    }
}
