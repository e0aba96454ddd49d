//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::RunSpec;

/// Validate a run specification
///
/// Checks numeric ranges only; data and model paths are checked when they
/// are opened.
pub fn validate_config(spec: &RunSpec) -> Result<(), ValidationError> {
    let t = &spec.training;

    if t.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(t.batch_size));
    }
    if t.eval_batch_size == 0 {
        return Err(ValidationError::InvalidEvalBatchSize(t.eval_batch_size));
    }
    if spec.test.batch_size == 0 {
        return Err(ValidationError::InvalidTestBatchSize(spec.test.batch_size));
    }

    // NaN fails both comparisons, so test for the accepted range
    if !(t.learning_rate > 0.0 && t.learning_rate <= 1.0) {
        return Err(ValidationError::InvalidLearningRate(t.learning_rate));
    }
    if !(t.decay_rate > 0.0 && t.decay_rate <= 1.0) {
        return Err(ValidationError::InvalidDecayRate(t.decay_rate));
    }
    if t.min_learning_rate.is_nan() || t.min_learning_rate < 0.0 {
        return Err(ValidationError::InvalidMinLearningRate(t.min_learning_rate));
    }
    if t.min_learning_rate > t.learning_rate {
        return Err(ValidationError::MinAboveInitial {
            min: t.min_learning_rate,
            initial: t.learning_rate,
        });
    }

    if t.test_after_batches == 0 {
        return Err(ValidationError::InvalidTestInterval(t.test_after_batches));
    }
    if t.max_batches == 0 {
        return Err(ValidationError::InvalidMaxBatches(t.max_batches));
    }
    if t.max_epochs == 0 {
        return Err(ValidationError::InvalidEpochs(t.max_epochs));
    }

    if !(t.train_fraction > 0.0 && t.train_fraction < 1.0) {
        return Err(ValidationError::InvalidTrainFraction(t.train_fraction));
    }
    if t.num_classes < 2 {
        return Err(ValidationError::InvalidNumClasses(t.num_classes));
    }

    Ok(())
}
