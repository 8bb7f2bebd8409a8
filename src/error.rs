use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request fields outside their accepted range.
    #[error("{0}")]
    InvalidInput(String),

    /// Upload rejected before or during parsing.
    #[error("{0}")]
    InvalidUpload(String),

    /// The risk model could not score the record.
    #[error("risk model failure: {0}")]
    Model(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            ServiceError::Model(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), message = %message, "request rejected");
        }

        (status, Json(json!({ "detail": message }))).into_response()
    }
}

impl From<csv::Error> for ServiceError {
    fn from(err: csv::Error) -> Self {
        ServiceError::InvalidUpload(format!("malformed CSV: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
