//! Error types for imgtrain

use crate::data::Geometry;
use thiserror::Error;

/// Errors that abort a training or evaluation run
#[derive(Debug, Error)]
pub enum Error {
    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Image/label count mismatch: {images} images, {labels} labels")]
    SizeMismatch { images: usize, labels: usize },

    #[error("Label {label} out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("Sample {index} has geometry {found}, expected {expected}")]
    GeometryMismatch {
        index: usize,
        expected: Geometry,
        found: Geometry,
    },

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Model engine error: {0}")]
    Engine(String),

    #[error("Model persistence error: {0}")]
    Persistence(String),

    #[error("Malformed dataset file: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for imgtrain operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_invariant() {
        let err = Error::SizeMismatch {
            images: 10,
            labels: 9,
        };
        assert_eq!(
            err.to_string(),
            "Image/label count mismatch: 10 images, 9 labels"
        );

        let err = Error::LabelOutOfRange {
            label: 12,
            num_classes: 10,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("10 classes"));
    }

    #[test]
    fn test_geometry_mismatch_display() {
        let err = Error::GeometryMismatch {
            index: 3,
            expected: Geometry::new(1, 28, 28),
            found: Geometry::new(3, 28, 28),
        };
        assert_eq!(
            err.to_string(),
            "Sample 3 has geometry 3x28x28, expected 1x28x28"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
