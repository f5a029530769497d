//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use farmvision_inference::NUM_CLASSES;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub catalog_loaded: bool,
    pub catalog_entries: usize,
    pub num_classes: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health - reports whether the classifier and catalog loaded
pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    let model_loaded = state.service.classifier_loaded();
    let catalog_entries = state.service.catalog_entries();
    let catalog_loaded = catalog_entries > 0;

    let status = if model_loaded && catalog_loaded {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        model_loaded,
        catalog_loaded,
        catalog_entries,
        num_classes: NUM_CLASSES,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
