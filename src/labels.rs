//! Class labels for the crop-leaf disease classifier
//!
//! The label order matches the output layer of the trained artifact:
//! position `i` in the model's probability vector corresponds to
//! `CLASS_NAMES[i]`. The list is fixed at build time and never mutated.
//!
//! Historical note: an earlier variant of the trained model carried a 16th
//! entry (`PlantVillage`, a dataset-folder artifact rather than a disease).
//! The canonical list is the 15-entry one below; the probability-vector
//! length is checked against it when the model is scored.

use crate::NUM_CLASSES;

/// Class names for the crop-leaf disease classifier (15 classes)
/// Format follows the training dataset directory names.
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Pepper__bell___Bacterial_spot",
    "Pepper__bell___healthy",
    "Potato___Early_blight",
    "Potato___healthy",
    "Potato___Late_blight",
    "Tomato_Bacterial_spot",
    "Tomato_Early_blight",
    "Tomato_healthy",
    "Tomato_Late_blight",
    "Tomato_Leaf_Mold",
    "Tomato_Septoria_leaf_spot",
    "Tomato_Spider_mites_Two_spotted_spider_mite",
    "Tomato__Target_Spot",
    "Tomato__Tomato_mosaic_virus",
    "Tomato__Tomato_YellowLeaf__Curl_Virus",
];

/// Get the class name for a given label index
pub fn class_name(label: usize) -> Option<&'static str> {
    CLASS_NAMES.get(label).copied()
}

/// Get the label index for a given class name
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&n| n == name)
}

/// Check if a class represents a healthy plant (not diseased)
pub fn is_healthy_class(label: usize) -> bool {
    CLASS_NAMES
        .get(label)
        .map(|name| name.ends_with("healthy"))
        .unwrap_or(false)
}

/// Human-readable form of a label (underscores become spaces)
pub fn display_name(label: &str) -> String {
    label.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count() {
        assert_eq!(CLASS_NAMES.len(), NUM_CLASSES);
        assert_eq!(CLASS_NAMES.len(), 15);
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(0), Some("Pepper__bell___Bacterial_spot"));
        assert_eq!(class_name(14), Some("Tomato__Tomato_YellowLeaf__Curl_Virus"));
        assert_eq!(class_name(15), None);
    }

    #[test]
    fn test_class_index() {
        assert_eq!(class_index("Potato___Early_blight"), Some(2));
        assert_eq!(class_index("Tomato_healthy"), Some(7));
        assert_eq!(class_index("PlantVillage"), None);
    }

    #[test]
    fn test_is_healthy_class() {
        assert!(is_healthy_class(1));
        assert!(is_healthy_class(3));
        assert!(!is_healthy_class(0));
        assert!(!is_healthy_class(100));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Tomato_Leaf_Mold"), "Tomato Leaf Mold");
    }

    #[test]
    fn test_labels_unique() {
        for (i, a) in CLASS_NAMES.iter().enumerate() {
            for b in CLASS_NAMES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
