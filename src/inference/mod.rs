//! Inference module: image decoding, model scoring, and orchestration
//!
//! The pipeline is decode -> score -> resolve: raw upload bytes become a
//! normalized tensor, the classifier turns the tensor into a probability
//! vector, and the service maps the argmax class to a treatment record.

pub mod classifier;
pub mod decode;
pub mod service;

pub use classifier::OnnxClassifier;
pub use decode::decode;
pub use service::{Diagnosis, PredictionService};

use ndarray::Array4;

use crate::utils::error::Result;

/// Scoring seam over the underlying model runtime.
///
/// Implementations must be deterministic for a given input and loaded
/// weights. `score` takes `&mut self` because ONNX Runtime sessions are
/// not proven safe for concurrent invocation; the service serializes
/// calls through a mutex.
pub trait Scorer: Send {
    /// Score a `[1, H, W, 3]` tensor, returning one probability per class
    fn score(&mut self, input: &Array4<f32>) -> Result<Vec<f32>>;
}
