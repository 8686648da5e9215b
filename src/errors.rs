use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("failed to process webhook: {0}")]
    Processing(String),

    #[error("messaging error: {0}")]
    Messaging(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Processing(_) => StatusCode::BAD_REQUEST,
            AppError::Messaging(_) => StatusCode::BAD_GATEWAY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Maps a handler panic to the same 400 reply as any other processing failure.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected error".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");
    AppError::Processing(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::BadRequest("missing to".into()), StatusCode::BAD_REQUEST),
            (AppError::Processing("bad json".into()), StatusCode::BAD_REQUEST),
            (AppError::Messaging("timeout".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_processing_message_prefix() {
        let err = AppError::Processing("boom".into());
        assert_eq!(err.to_string(), "failed to process webhook: boom");
    }

    #[test]
    fn test_panic_payloads() {
        let res = panic_response(Box::new("static str"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let res = panic_response(Box::new(42_u8));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
