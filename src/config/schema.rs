//! YAML schema definitions for declarative run configuration

use crate::train::TrainConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete run specification
///
/// ```yaml
/// data:
///   train_images: data/train-images-idx3-ubyte
///   train_labels: data/train-labels-idx1-ubyte
///   test_images: data/t10k-images-idx3-ubyte
///   test_labels: data/t10k-labels-idx1-ubyte
/// model:
///   path: out/mnist.json
/// training:
///   max_epochs: 5
///   seed: 42
/// test:
///   batch_size: 64
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSpec {
    /// IDX data files
    pub data: DataPaths,

    /// Where the trained model is written and read
    pub model: ModelRef,

    /// Training hyperparameters
    #[serde(default)]
    pub training: TrainConfig,

    /// Test-set evaluation settings
    #[serde(default)]
    pub test: TestSpec,
}

/// Paths to the four IDX files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataPaths {
    pub train_images: PathBuf,
    pub train_labels: PathBuf,
    pub test_images: PathBuf,
    pub test_labels: PathBuf,
}

/// Model file reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelRef {
    pub path: PathBuf,
}

/// Test-set evaluation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestSpec {
    /// Samples per evaluation batch
    pub batch_size: usize,
}

impl Default for TestSpec {
    fn default() -> Self {
        Self { batch_size: 64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r"
data:
  train_images: train-images
  train_labels: train-labels
  test_images: test-images
  test_labels: test-labels
model:
  path: model.json
";

    #[test]
    fn test_minimal_spec_uses_defaults() {
        let spec: RunSpec = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(spec.model.path, PathBuf::from("model.json"));
        assert_eq!(spec.training, TrainConfig::default());
        assert_eq!(spec.test.batch_size, 64);
    }

    #[test]
    fn test_training_section_overrides() {
        let yaml = format!("{MINIMAL}training:\n  max_epochs: 2\n  seed: 5\ntest:\n  batch_size: 16\n");
        let spec: RunSpec = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(spec.training.max_epochs, 2);
        assert_eq!(spec.training.seed, Some(5));
        assert_eq!(spec.training.batch_size, 128);
        assert_eq!(spec.test.batch_size, 16);
    }

    #[test]
    fn test_missing_data_section_rejected() {
        let result: Result<RunSpec, _> = serde_yaml::from_str("model:\n  path: m.json\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let yaml = format!("{MINIMAL}optimizer: adam\n");
        let result: Result<RunSpec, _> = serde_yaml::from_str(&yaml);
        assert!(result.is_err());
    }
}
