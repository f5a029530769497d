//! Prediction Service
//!
//! Orchestrates the pipeline for one request: validate the upload, decode
//! it into a tensor, score it with the classifier, resolve the argmax
//! class to a label, and look up (or fall back for) the treatment record.
//!
//! The service owns the classifier and catalog as immutable-after-init
//! fields and is shared by reference across concurrent requests. The
//! classifier sits behind a mutex because the underlying runtime is not
//! proven safe for concurrent invocation; the catalog is read-only and
//! needs no guard.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{fallback_record, DiseaseRecord, TreatmentCatalog};
use crate::inference::{decode, Scorer};
use crate::labels::{class_name, CLASS_NAMES};
use crate::utils::error::{InferenceError, Result};

/// Diagnosis payload returned for one prediction.
///
/// The record fields are flattened so the upstream backend reads
/// `crop`, `disease`, `symptoms`, `treatment`, and `precautions`
/// directly alongside `prediction_class` and `confidence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Predicted class label
    pub prediction_class: String,
    /// Argmax score, rounded to 4 decimal places
    pub confidence: f64,
    /// Disease record (real catalog entry or the fixed fallback)
    #[serde(flatten)]
    pub record: DiseaseRecord,
}

/// Confidence rounding policy: always 4 decimal places, for both the
/// catalog-hit and fallback paths.
fn round_confidence(raw: f32) -> f64 {
    (raw as f64 * 10_000.0).round() / 10_000.0
}

/// Orchestrator for the prediction pipeline
pub struct PredictionService {
    classifier: Option<Mutex<Box<dyn Scorer>>>,
    catalog: TreatmentCatalog,
}

impl PredictionService {
    /// Build the service. `classifier` is `None` when the model artifact
    /// failed to load at startup (degraded mode); the catalog may be
    /// empty for the same reason.
    pub fn new(classifier: Option<Box<dyn Scorer>>, catalog: TreatmentCatalog) -> Self {
        Self {
            classifier: classifier.map(Mutex::new),
            catalog,
        }
    }

    /// Whether the classifier loaded successfully
    pub fn classifier_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Number of entries in the treatment catalog
    pub fn catalog_entries(&self) -> usize {
        self.catalog.len()
    }

    /// Run the full pipeline on one uploaded file.
    ///
    /// `content_type` is the declared content type of the upload; it must
    /// begin with `image/` before any decoding is attempted.
    pub fn predict(&self, content_type: Option<&str>, bytes: &[u8]) -> Result<Diagnosis> {
        // Degraded mode is checked first: "service unavailable" must be
        // distinguishable from "your input is bad".
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(InferenceError::ModelUnavailable)?;

        let declared = content_type.unwrap_or("");
        if !declared.starts_with("image/") {
            return Err(InferenceError::UnsupportedMediaType(declared.to_string()));
        }

        let tensor = decode(bytes)?;

        let probabilities = {
            let mut scorer = classifier
                .lock()
                .map_err(|_| InferenceError::Internal("classifier lock poisoned".to_string()))?;
            scorer.score(&tensor)?
        };

        if probabilities.len() != CLASS_NAMES.len() {
            return Err(InferenceError::Internal(format!(
                "Model produced {} scores but {} labels are configured",
                probabilities.len(),
                CLASS_NAMES.len()
            )));
        }

        let (predicted_class, &raw_confidence) = probabilities
            .iter()
            .enumerate()
            .max_by(|&(_, a), &(_, b)| a.total_cmp(b))
            .ok_or_else(|| InferenceError::Internal("empty probability vector".to_string()))?;

        let label = class_name(predicted_class)
            .ok_or_else(|| {
                InferenceError::Internal(format!("no label at index {}", predicted_class))
            })?
            .to_string();

        debug!(
            "Predicted '{}' (class {}) with confidence {:.4}",
            label, predicted_class, raw_confidence
        );

        let record = match self.catalog.lookup(&label) {
            Some(record) => record.clone(),
            None => {
                warn!("No catalog entry for '{}', returning fallback record", label);
                fallback_record(&label)
            }
        };

        Ok(Diagnosis {
            prediction_class: label,
            confidence: round_confidence(raw_confidence),
            record,
        })
    }
}
