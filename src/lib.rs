//! # FarmVision Inference
//!
//! A Rust inference service for crop-leaf disease classification.
//! Accepts an uploaded leaf image, scores it with a pretrained ONNX
//! classifier, and maps the predicted class to a treatment record.
//!
//! ## Modules
//!
//! - `labels`: canonical ordered class-label list and helpers
//! - `catalog`: disease/treatment reference data loaded at startup
//! - `inference`: image decoding, model scoring, and the prediction pipeline
//! - `utils`: error types and logging setup
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use farmvision_inference::catalog::TreatmentCatalog;
//! use farmvision_inference::inference::{OnnxClassifier, PredictionService, Scorer};
//!
//! let classifier = OnnxClassifier::load("model/plant_disease.onnx".as_ref())?;
//! let catalog = TreatmentCatalog::load("data/treatment_data.json".as_ref())?;
//! let service = PredictionService::new(Some(Box::new(classifier)), catalog);
//! let diagnosis = service.predict(Some("image/jpeg"), &bytes)?;
//! ```

pub mod catalog;
pub mod inference;
pub mod labels;
pub mod utils;

// Re-export commonly used items for convenience
pub use catalog::{DiseaseRecord, Treatment, TreatmentCatalog};
pub use inference::classifier::OnnxClassifier;
pub use inference::decode::decode;
pub use inference::service::{Diagnosis, PredictionService};
pub use inference::Scorer;
pub use utils::error::{InferenceError, Result};

/// Number of disease classes the classifier predicts over
pub const NUM_CLASSES: usize = 15;

/// Model input edge length in pixels (inputs are IMAGE_SIZE x IMAGE_SIZE RGB)
pub const IMAGE_SIZE: u32 = 128;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
