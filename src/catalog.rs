//! Treatment Catalog Module
//!
//! Static reference data mapping a predicted class label to a disease
//! record (crop, disease, symptoms, treatment, precautions). The catalog
//! is loaded once from a JSON document at startup and is read-only for
//! the rest of the process lifetime, so lookups need no locking.
//!
//! A lookup miss is not an error: the orchestrator substitutes a fixed
//! generic fallback record (see [`fallback_record`]).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::error::{InferenceError, Result};

fn unknown() -> String {
    "Unknown".to_string()
}

fn not_applicable() -> String {
    "N/A".to_string()
}

/// Treatment guidance for a disease
///
/// Absent fields are filled with literal defaults at parse time so the
/// response never carries null or missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    /// Recommended chemical treatment
    #[serde(default = "unknown")]
    pub chemical: String,
    /// Recommended organic treatment
    #[serde(default = "unknown")]
    pub organic: String,
    /// Application schedule
    #[serde(default = "not_applicable")]
    pub schedule: String,
    /// Application quantity/dosage
    #[serde(default = "not_applicable")]
    pub quantity: String,
}

impl Default for Treatment {
    fn default() -> Self {
        Self {
            chemical: unknown(),
            organic: unknown(),
            schedule: not_applicable(),
            quantity: not_applicable(),
        }
    }
}

/// Reference record for one disease class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Crop the disease affects (e.g. "Tomato")
    #[serde(default = "unknown")]
    pub crop: String,
    /// Disease name (e.g. "Late Blight")
    #[serde(default = "unknown")]
    pub disease: String,
    /// Visible symptoms on the plant
    #[serde(default = "unknown")]
    pub symptoms: String,
    /// Treatment guidance
    #[serde(default)]
    pub treatment: Treatment,
    /// Preventive precautions
    #[serde(default = "unknown")]
    pub precautions: String,
}

/// The fixed generic record returned when a predicted label has no
/// catalog entry. Distinct, hardcoded text so it can never be confused
/// with a found-but-sparse record.
pub fn fallback_record(label: &str) -> DiseaseRecord {
    DiseaseRecord {
        crop: "Unknown".to_string(),
        disease: crate::labels::display_name(label),
        symptoms: "No information available".to_string(),
        treatment: Treatment {
            chemical: "Consult agricultural expert".to_string(),
            organic: "Consult agricultural expert".to_string(),
            schedule: "N/A".to_string(),
            quantity: "N/A".to_string(),
        },
        precautions: "Consult with local agricultural extension service".to_string(),
    }
}

/// Mapping from class label to disease record, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct TreatmentCatalog {
    records: HashMap<String, DiseaseRecord>,
}

impl TreatmentCatalog {
    /// Load the catalog from a JSON document of the form
    /// `{"<class label>": {crop, disease, symptoms, treatment, precautions}, ...}`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InferenceError::Config(format!(
                "Failed to read treatment catalog at {:?}: {}",
                path, e
            ))
        })?;
        let records: HashMap<String, DiseaseRecord> =
            serde_json::from_str(&content).map_err(|e| {
                InferenceError::Config(format!(
                    "Malformed treatment catalog at {:?}: {}",
                    path, e
                ))
            })?;

        info!("Loaded treatment catalog: {} entries", records.len());
        Ok(Self { records })
    }

    /// An empty catalog, used when the service runs degraded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from in-memory records
    pub fn from_records(records: HashMap<String, DiseaseRecord>) -> Self {
        Self { records }
    }

    /// Look up the record for a class label. A miss is the defined
    /// fallback path, not an error.
    pub fn lookup(&self, label: &str) -> Option<&DiseaseRecord> {
        self.records.get(label)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the labels the catalog knows about
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "Tomato_Late_blight": {
                "crop": "Tomato",
                "disease": "Late Blight",
                "symptoms": "Dark water-soaked lesions on leaves",
                "treatment": {
                    "chemical": "Chlorothalonil spray",
                    "organic": "Copper fungicide",
                    "schedule": "Every 7 days",
                    "quantity": "2 g/L"
                },
                "precautions": "Avoid overhead irrigation"
            },
            "Potato___healthy": {
                "crop": "Potato",
                "disease": "Healthy"
            }
        }"#
    }

    #[test]
    fn test_parse_and_lookup() {
        let records: HashMap<String, DiseaseRecord> =
            serde_json::from_str(sample_json()).unwrap();
        let catalog = TreatmentCatalog::from_records(records);

        let record = catalog.lookup("Tomato_Late_blight").unwrap();
        assert_eq!(record.crop, "Tomato");
        assert_eq!(record.disease, "Late Blight");
        assert_eq!(record.treatment.chemical, "Chlorothalonil spray");
        assert_eq!(record.treatment.quantity, "2 g/L");

        assert!(catalog.lookup("Tomato_Leaf_Mold").is_none());
    }

    #[test]
    fn test_absent_fields_get_defaults() {
        let records: HashMap<String, DiseaseRecord> =
            serde_json::from_str(sample_json()).unwrap();
        let record = &records["Potato___healthy"];

        assert_eq!(record.symptoms, "Unknown");
        assert_eq!(record.precautions, "Unknown");
        assert_eq!(record.treatment.chemical, "Unknown");
        assert_eq!(record.treatment.organic, "Unknown");
        assert_eq!(record.treatment.schedule, "N/A");
        assert_eq!(record.treatment.quantity, "N/A");
    }

    #[test]
    fn test_fallback_record_text() {
        let record = fallback_record("Tomato_Leaf_Mold");

        assert_eq!(record.crop, "Unknown");
        assert_eq!(record.disease, "Tomato Leaf Mold");
        assert_eq!(record.symptoms, "No information available");
        assert_eq!(record.treatment.chemical, "Consult agricultural expert");
        assert_eq!(record.treatment.organic, "Consult agricultural expert");
        assert_eq!(record.treatment.schedule, "N/A");
        assert_eq!(record.treatment.quantity, "N/A");
        assert_eq!(
            record.precautions,
            "Consult with local agricultural extension service"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let catalog = TreatmentCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        // Round-trip: every loaded key yields a fully populated record
        for label in catalog.labels() {
            let record = catalog.lookup(label).unwrap();
            assert!(!record.crop.is_empty());
            assert!(!record.disease.is_empty());
            assert!(!record.symptoms.is_empty());
            assert!(!record.treatment.chemical.is_empty());
            assert!(!record.treatment.organic.is_empty());
            assert!(!record.treatment.schedule.is_empty());
            assert!(!record.treatment.quantity.is_empty());
            assert!(!record.precautions.is_empty());
        }
    }

    #[test]
    fn test_shipped_catalog_covers_all_labels() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/treatment_data.json");
        let catalog = TreatmentCatalog::load(&path).unwrap();

        assert_eq!(catalog.len(), crate::NUM_CLASSES);
        for label in crate::labels::CLASS_NAMES {
            let record = catalog.lookup(label);
            assert!(record.is_some(), "missing catalog entry for {}", label);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = TreatmentCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, InferenceError::Config(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = TreatmentCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, InferenceError::Config(_)));
    }
}
