use crate::domain::dashboard::ParseViewError;
use crate::domain::time_range::ParseTimeRangeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    InvalidRange(#[from] ParseTimeRangeError),
    #[error(transparent)]
    UnknownView(#[from] ParseViewError),
    #[error("notification {0} not found")]
    NotificationNotFound(u32),
    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("compression error: {0}")]
    Compression(#[from] std::io::Error),
    #[error("response build error: {0}")]
    Http(#[from] axum::http::Error),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            DashboardError::UnknownView(_) | DashboardError::NotificationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Repository(_)
            | DashboardError::Serialization(_)
            | DashboardError::Compression(_)
            | DashboardError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            return (status, "Internal server error").into_response();
        }
        (status, self.to_string()).into_response()
    }
}
