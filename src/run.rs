//! Run entry points driven by a [`RunSpec`]
//!
//! Each function loads what it needs from the paths in the run spec, so the CLI
//! commands stay thin.

use crate::config::{load_config, validate_config, RunSpec};
use crate::data::{Dataset, DatasetLoader, IdxLoader, Sample};
use crate::engine::{ModelEngine, SoftmaxRegression};
use crate::error::{Error, Result};
use crate::eval::{evaluate, predict_classes, EvalResult};
use crate::train::{ProgressCallback, TrainResult, Trainer};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

/// Pixel threshold used by binarized prediction
pub const BINARIZE_THRESHOLD: u8 = 127;

/// One classified test image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Position in the test set
    pub index: usize,
    pub predicted: usize,
    pub actual: usize,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn check(spec: &RunSpec) -> Result<()> {
    validate_config(spec).map_err(|e| Error::Config(format!("Invalid config: {e}")))
}

fn load_test_set(spec: &RunSpec) -> Result<Dataset> {
    let dataset = IdxLoader.load_dataset(&spec.data.test_images, &spec.data.test_labels)?;
    info!(samples = dataset.len(), "loaded test data");
    Ok(dataset)
}

/// Shuffle `dataset` once and split it into `(train, validation)`
///
/// Also returns the random stream after the shuffle; the trainer continues it
/// for its epoch shuffles.
fn shuffled_split(
    mut dataset: Dataset,
    train_fraction: f64,
    seed: Option<u64>,
) -> Result<(Dataset, Dataset, StdRng)> {
    let mut rng = rng_from(seed);
    dataset.shuffle(&mut rng)?;
    let (train, validation) = dataset.split(train_fraction);
    Ok((train, validation, rng))
}

/// Train from a YAML file and save the model
pub fn train_from_yaml<P: AsRef<Path>>(config_path: P) -> Result<TrainResult> {
    let spec = load_config(config_path)?;
    train_from_spec(&spec)
}

/// Load training data, shuffle, split, fit, and save the model
///
/// A failed save fails the run.
pub fn train_from_spec(spec: &RunSpec) -> Result<TrainResult> {
    check(spec)?;
    let config = spec.training.clone();

    let dataset = IdxLoader.load_dataset(&spec.data.train_images, &spec.data.train_labels)?;
    let geometry = dataset.geometry().ok_or(Error::EmptyDataset)?;
    info!(samples = dataset.len(), %geometry, "loaded training data");

    let (mut train, validation, rng) =
        shuffled_split(dataset, config.train_fraction, config.seed)?;
    info!(
        train = train.len(),
        validation = validation.len(),
        "split training data"
    );

    let engine = SoftmaxRegression::new(geometry, config.num_classes, config.learning_rate);
    let mut trainer = Trainer::new(engine, config).with_rng(rng);
    trainer.add_callback(ProgressCallback::default());
    let result = trainer.fit(&mut train, &validation)?;

    trainer.engine().save(&spec.model.path)?;
    info!(path = %spec.model.path.display(), "saved model");
    Ok(result)
}

/// Evaluate the saved model on the test set
pub fn test_from_spec(spec: &RunSpec, batch_size: usize) -> Result<EvalResult> {
    check(spec)?;
    let dataset = load_test_set(spec)?;
    let engine = SoftmaxRegression::from_file(&spec.model.path)?;
    info!(path = %spec.model.path.display(), "loaded model");

    evaluate(&engine, batch_size, engine.num_classes(), &dataset)
}

/// Classify `count` distinct test images chosen at random
///
/// With `binarize`, pixels above [`BINARIZE_THRESHOLD`] become 255 and the
/// rest 0 before classification. `count` is capped at the test set size.
pub fn predict_from_spec(
    spec: &RunSpec,
    count: usize,
    binarize: bool,
    seed: Option<u64>,
) -> Result<Vec<Prediction>> {
    check(spec)?;
    let dataset = load_test_set(spec)?;
    let engine = SoftmaxRegression::from_file(&spec.model.path)?;

    let amount = count.min(dataset.len());
    if amount == 0 {
        return Ok(Vec::new());
    }
    let picks = index::sample(&mut rng_from(seed), dataset.len(), amount).into_vec();

    let samples: Vec<Sample> = picks
        .iter()
        .map(|&i| {
            let sample = &dataset.samples()[i];
            let image = if binarize {
                sample.image.binarized(BINARIZE_THRESHOLD)
            } else {
                sample.image.clone()
            };
            Sample::new(image, sample.label)
        })
        .collect();

    let classes = predict_classes(&engine, engine.num_classes(), &samples)?;
    Ok(picks
        .into_iter()
        .zip(samples.iter().zip(classes))
        .map(|(index, (sample, predicted))| Prediction {
            index,
            predicted,
            actual: sample.label,
        })
        .collect())
}
