//! ONNX classifier loading and scoring
//!
//! Wraps an ONNX Runtime session around the pretrained plant-disease
//! model artifact. The session is loaded once at startup and treated as
//! read-only weights; scoring is a deterministic function of the input
//! tensor. `Session::run` requires `&mut self`, so callers serialize
//! access (see `PredictionService`).

use std::path::Path;

use ndarray::Array4;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::TensorRef;
use tracing::info;

use crate::inference::Scorer;
use crate::utils::error::{InferenceError, Result};

/// Pretrained classifier backed by an ONNX Runtime session
pub struct OnnxClassifier {
    session: Session,
    input_name: String,
    output_name: String,
}

impl OnnxClassifier {
    /// Load the model artifact from a filesystem path.
    ///
    /// Fails with `InferenceError::Config` if the file is missing or not a
    /// valid ONNX model; the caller keeps the process alive in degraded
    /// mode rather than crashing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(InferenceError::Config(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                InferenceError::Config(format!("Failed to create session builder: {e}"))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                InferenceError::Config(format!("Failed to set optimization level: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| {
                InferenceError::Config(format!(
                    "Failed to load model from {}: {e}",
                    path.display()
                ))
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| InferenceError::Config("Model declares no inputs".to_string()))?;
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Config("Model declares no outputs".to_string()))?;

        info!(
            "Loaded classifier from {} (input '{}', output '{}')",
            path.display(),
            input_name,
            output_name
        );

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }
}

impl Scorer for OnnxClassifier {
    fn score(&mut self, input: &Array4<f32>) -> Result<Vec<f32>> {
        let input_contiguous = input.as_standard_layout();
        let input_tensor = TensorRef::from_array_view(&input_contiguous)
            .map_err(|e| InferenceError::Internal(format!("Failed to create input tensor: {e}")))?;

        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];
        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| InferenceError::Internal(format!("Inference failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            InferenceError::Internal(format!("Output '{}' not found", self.output_name))
        })?;

        let (_shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Internal(format!("Failed to extract output: {e}")))?;

        Ok(data.to_vec())
    }
}
