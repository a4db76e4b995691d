use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum RollcallError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<figment::Error> for RollcallError {
    fn from(err: figment::Error) -> Self {
        RollcallError::ConfigError(Box::new(err))
    }
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> axum::response::Response {
        // Storage faults are not translated; the caller only sees a generic 500.
        error!(error = %self, "request failed");
        let body = ApiErrorObject {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody { inner: body }),
        )
            .into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn every_error_is_an_opaque_500() {
        let resp = RollcallError::RactorError("mailbox closed".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"error":{"code":"INTERNAL_ERROR","message":"An internal server error occurred."}}"#
        );
    }
}
