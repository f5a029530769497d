//! Application state for the inference server
//!
//! Holds the prediction service (classifier + catalog, immutable after
//! startup) and is shared by reference across request handlers.

use std::sync::Arc;
use std::time::Instant;

use farmvision_inference::PredictionService;

/// Shared application state
pub struct AppState {
    /// The prediction pipeline (owns classifier and catalog)
    pub service: PredictionService,
    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
