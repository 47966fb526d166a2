/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_core::FolioError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FolioError> for ServerError {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::Delivery(msg) => ServerError::Delivery(msg),
            other => ServerError::BadRequest(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Delivery(ref msg) => {
                tracing::error!("Delivery error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    folio_core::contact::FAILURE_MESSAGE.to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Serialization(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Serialization error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_by_cause() {
        let err: ServerError = FolioError::MissingField("email").into();
        assert!(matches!(err, ServerError::BadRequest(_)));

        let err: ServerError = FolioError::UnknownCategory("Games".to_string()).into();
        assert!(matches!(err, ServerError::BadRequest(_)));

        let err: ServerError = FolioError::delivery("down").into();
        assert!(matches!(err, ServerError::Delivery(_)));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ServerError::Delivery("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServerError::Config("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
