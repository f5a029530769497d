//! HTTP route handlers

pub mod health;
pub mod predict;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use farmvision_inference::InferenceError;

/// JSON error body returned to the caller
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a pipeline error to an HTTP status and JSON body.
///
/// Client input problems map to 4xx, degraded mode to 503, and anything
/// unexpected to a generic 500 without leaking internals.
pub fn error_response(err: InferenceError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &err {
        InferenceError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        InferenceError::ImageDecode(_) => StatusCode::BAD_REQUEST,
        InferenceError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        InferenceError::Config(_) | InferenceError::Internal(_) | InferenceError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Failed to process image".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ErrorBody { error: message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, _) =
            error_response(InferenceError::UnsupportedMediaType("text/plain".into()));
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let (status, _) = error_response(InferenceError::ImageDecode("bad".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(InferenceError::ModelUnavailable);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = error_response(InferenceError::Internal("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_errors_not_leaked() {
        let (_, Json(body)) = error_response(InferenceError::Internal("session blew up".into()));
        assert_eq!(body.error, "Failed to process image");
    }
}
