use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use predistock::{DashboardError, PredistockError};
use thiserror::Error;

/// Failures surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error(transparent)]
    Broker(#[from] PredistockError),
    #[error("template: {0}")]
    Template(#[from] minijinja::Error),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Dashboard(
                DashboardError::SymbolNotFound { .. } | DashboardError::EmptySeries { .. },
            ) => StatusCode::NOT_FOUND,
            Self::Dashboard(DashboardError::Network(_)) => StatusCode::BAD_GATEWAY,
            Self::Dashboard(e) if e.is_user_error() => StatusCode::BAD_REQUEST,
            Self::Broker(PredistockError::InvalidArg(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Dashboard(e) => e.user_message(),
            other => format!("Error: {other}"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
