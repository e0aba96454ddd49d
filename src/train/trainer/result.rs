//! Training result types

use crate::eval::EvalResult;

/// Outcome of one completed epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochRecord {
    pub epoch: usize,
    /// Batches trained in this epoch
    pub batches: usize,
    /// End-of-epoch validation
    pub validation: EvalResult,
    /// Learning rate after the end-of-epoch decay
    pub next_learning_rate: f32,
}

/// Result of a training run
#[derive(Debug, Clone)]
pub struct TrainResult {
    /// Number of epochs that ran (including one cut short by the batch cap)
    pub epochs: usize,
    /// Training batches across all epochs
    pub global_batches: usize,
    /// Whether training ended on `max_batches` rather than `max_epochs`
    pub hit_batch_cap: bool,
    /// Learning rate at the end of the run
    pub final_learning_rate: f32,
    /// Validation after the last epoch
    pub final_validation: EvalResult,
    /// Per-epoch history
    pub history: Vec<EpochRecord>,
    /// Total training time in seconds
    pub elapsed_secs: f64,
}

impl TrainResult {
    /// Best end-of-epoch validation accuracy, if any epoch ran
    pub fn best_accuracy(&self) -> Option<f32> {
        self.history
            .iter()
            .map(|r| r.validation.accuracy)
            .reduce(f32::max)
    }
}
