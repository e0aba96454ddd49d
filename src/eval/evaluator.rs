//! Batched evaluation over a dataset

use crate::data::{Dataset, Sample};
use crate::engine::ModelEngine;
use crate::error::{Error, Result};
use crate::train::{argmax, correct_count, BatchEncoder, RunningMetric};
use std::fmt;
use std::time::Instant;

/// Evaluation results
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalResult {
    /// Correct predictions / samples over the whole dataset
    pub accuracy: f32,
    /// Running average of per-batch losses
    pub loss: f32,
    /// Number of samples evaluated
    pub samples: usize,
    /// Number of batches evaluated
    pub batches: usize,
    /// Wall time in milliseconds
    pub inference_time_ms: f64,
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loss: {:.6}, accuracy: {:.4}% ({} samples, {:.2}ms)",
            self.loss,
            self.accuracy * 100.0,
            self.samples,
            self.inference_time_ms
        )
    }
}

/// Evaluate `engine` on `dataset` in sequential batches of `batch_size`
///
/// Only `predict` and `loss` are called, through a shared reference, so the
/// engine's parameters are never updated. Accuracy counts correct rows over
/// all batches, so a short final batch weighs only its own samples.
pub fn evaluate<E: ModelEngine + ?Sized>(
    engine: &E,
    batch_size: usize,
    num_classes: usize,
    dataset: &Dataset,
) -> Result<EvalResult> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if batch_size == 0 {
        return Err(Error::InvalidBatchSize(batch_size));
    }

    let start = Instant::now();
    let encoder = BatchEncoder::new(num_classes);
    let mut loss = RunningMetric::new();
    let mut correct = 0;
    let mut batches = 0;

    for batch in encoder.batches(dataset, batch_size) {
        let batch = batch?;
        let predictions = engine.predict(&batch.inputs)?;
        if predictions.dim() != batch.targets.dim() {
            return Err(Error::Engine(format!(
                "predictions have shape {:?}, expected {:?}",
                predictions.dim(),
                batch.targets.dim()
            )));
        }
        loss.update(engine.loss(&batch.targets, &predictions)?);
        correct += correct_count(&predictions, &batch.labels);
        batches += 1;
    }

    let result = EvalResult {
        accuracy: correct as f32 / dataset.len() as f32,
        loss: loss.value(),
        samples: dataset.len(),
        batches,
        inference_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    tracing::debug!(
        samples = result.samples,
        batches = result.batches,
        loss = result.loss,
        accuracy = result.accuracy,
        "evaluation finished"
    );
    Ok(result)
}

/// Predicted class of each sample
pub fn predict_classes<E: ModelEngine + ?Sized>(
    engine: &E,
    num_classes: usize,
    samples: &[Sample],
) -> Result<Vec<usize>> {
    let batch = BatchEncoder::new(num_classes).encode_samples(samples)?;
    let predictions = engine.predict(&batch.inputs)?;
    Ok(predictions
        .outer_iter()
        .map(|row| argmax(&row.to_vec()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Geometry, Image};
    use crate::engine::testing::RecordingEngine;
    use approx::assert_abs_diff_eq;

    /// Images whose pixel value is their label
    fn dataset(labels: &[u8]) -> Dataset {
        let geometry = Geometry::new(1, 1, 2);
        let images = labels
            .iter()
            .map(|&l| Image::new(vec![l; 2], geometry).unwrap())
            .collect();
        Dataset::from_parts(images, labels.to_vec()).unwrap()
    }

    #[test]
    fn test_perfect_engine() {
        let engine = RecordingEngine::new(4);
        let result = evaluate(&engine, 3, 4, &dataset(&[0, 1, 2, 3, 0, 1, 2])).unwrap();

        assert_eq!(result.accuracy, 1.0);
        assert_eq!(result.loss, 0.0);
        assert_eq!(result.samples, 7);
        assert_eq!(result.batches, 3);
        assert_eq!(*engine.predict_sizes.borrow(), vec![3, 3, 1]);
    }

    #[test]
    fn test_accuracy_weighted_by_samples_not_batches() {
        // Labels 0..4 predicted correctly; label-4 images predicted as 0
        let engine = RecordingEngine::new(4).with_offset(0);
        let data = dataset(&[0, 1, 2, 3]);
        let mut samples = data.samples().to_vec();
        // Fifth sample: image says class 0, label says 3
        samples.push(Sample::new(
            Image::new(vec![0; 2], Geometry::new(1, 1, 2)).unwrap(),
            3,
        ));
        let data = Dataset::new(samples).unwrap();

        let result = evaluate(&engine, 4, 4, &data).unwrap();
        // 4 of 5 correct; per-batch averaging would give (1.0 + 0.0) / 2
        assert_abs_diff_eq!(result.accuracy, 0.8, epsilon = 1e-6);
        // batch losses 0.0 and 1.0, running mean 0.5
        assert_abs_diff_eq!(result.loss, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_all_wrong() {
        let engine = RecordingEngine::new(4).with_offset(1);
        let result = evaluate(&engine, 2, 4, &dataset(&[0, 1, 2, 3])).unwrap();
        assert_eq!(result.accuracy, 0.0);
        assert_eq!(result.loss, 1.0);
    }

    #[test]
    fn test_never_trains() {
        let engine = RecordingEngine::new(4);
        evaluate(&engine, 2, 4, &dataset(&[0, 1, 2])).unwrap();
        assert!(engine.train_sizes.is_empty());
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let engine = RecordingEngine::new(4);
        let err = evaluate(&engine, 2, 4, &Dataset::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let engine = RecordingEngine::new(4);
        let err = evaluate(&engine, 0, 4, &dataset(&[1])).unwrap_err();
        assert!(matches!(err, Error::InvalidBatchSize(0)));
    }

    #[test]
    fn test_label_out_of_range_propagates() {
        let engine = RecordingEngine::new(4);
        let err = evaluate(&engine, 2, 4, &dataset(&[1, 7])).unwrap_err();
        assert!(matches!(err, Error::LabelOutOfRange { label: 7, .. }));
    }

    #[test]
    fn test_predict_classes() {
        let engine = RecordingEngine::new(4);
        let data = dataset(&[3, 1, 2]);
        let classes = predict_classes(&engine, 4, data.samples()).unwrap();
        assert_eq!(classes, vec![3, 1, 2]);
    }
}
