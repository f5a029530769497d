//! Prediction endpoint - upload an image, get a diagnosis

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info, warn};

use farmvision_inference::{Diagnosis, InferenceError};

use crate::routes::{error_response, ErrorBody};
use crate::state::SharedState;

/// POST /predict - run the prediction pipeline on an uploaded file.
///
/// Expects a multipart form with a `file` field. The field's declared
/// content type must indicate an image.
pub async fn predict(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<Diagnosis>, (StatusCode, Json<ErrorBody>)> {
    let mut upload: Option<(Option<String>, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Malformed multipart upload: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: format!("Malformed multipart upload: {}", e),
            }),
        )
    })? {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await.map_err(|e| {
                warn!("Failed to read upload body: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: format!("Failed to read upload: {}", e),
                    }),
                )
            })?;
            upload = Some((content_type, file_name, data.to_vec()));
            break;
        }
    }

    let Some((content_type, file_name, data)) = upload else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "No file uploaded".to_string(),
            }),
        ));
    };

    let file_name = file_name.unwrap_or_else(|| "<unnamed>".to_string());

    match state.service.predict(content_type.as_deref(), &data) {
        Ok(diagnosis) => {
            info!(
                "Diagnosed '{}' ({:.4}) for upload '{}'",
                diagnosis.prediction_class, diagnosis.confidence, file_name
            );
            Ok(Json(diagnosis))
        }
        Err(err) => {
            match &err {
                InferenceError::Internal(msg) => {
                    error!("Prediction failed for upload '{}': {}", file_name, msg)
                }
                other => warn!("Rejected upload '{}': {}", file_name, other),
            }
            Err(error_response(err))
        }
    }
}
