use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing text")]
    MissingText,

    #[error("Bad direction")]
    BadDirection,

    #[error("Empty response")]
    EmptyResponse,

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MissingText | AppError::BadDirection => StatusCode::BAD_REQUEST,
            AppError::EmptyResponse | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = match &self {
            AppError::Upstream(e) => {
                error!("Translation failed: {:?}", e);
                let message = e.to_string();
                if message.is_empty() {
                    "Server error".to_string()
                } else {
                    message
                }
            }
            AppError::EmptyResponse => {
                error!("Model returned no usable content");
                self.to_string()
            }
            _ => {
                warn!("Rejected request: {} ({})", self, status_code);
                self.to_string()
            }
        };

        (status_code, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(error: AppError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_client_errors_map_to_plain_text() {
        assert_eq!(
            body_of(AppError::MethodNotAllowed).await,
            (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
        );
        assert_eq!(
            body_of(AppError::Unauthorized).await,
            (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
        );
        assert_eq!(
            body_of(AppError::MissingText).await,
            (StatusCode::BAD_REQUEST, "Missing text".to_string())
        );
        assert_eq!(
            body_of(AppError::BadDirection).await,
            (StatusCode::BAD_REQUEST, "Bad direction".to_string())
        );
    }

    #[tokio::test]
    async fn test_upstream_error_carries_its_message() {
        let (status, body) = body_of(anyhow::anyhow!("connection refused").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "connection refused");
    }

    #[tokio::test]
    async fn test_upstream_error_without_message_is_generic() {
        let (status, body) = body_of(anyhow::anyhow!("").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server error");
    }
}
