//! Validation error types

/// Validation error type
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid eval batch size: {0} (must be > 0)")]
    InvalidEvalBatchSize(usize),

    #[error("Invalid test batch size: {0} (must be > 0)")]
    InvalidTestBatchSize(usize),

    #[error("Invalid learning rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid decay rate: {0} (must be > 0.0 and <= 1.0)")]
    InvalidDecayRate(f32),

    #[error("Invalid minimum learning rate: {0} (must be >= 0.0)")]
    InvalidMinLearningRate(f32),

    #[error("Minimum learning rate {min} exceeds initial learning rate {initial}")]
    MinAboveInitial { min: f32, initial: f32 },

    #[error("Invalid validation interval: {0} (must be > 0)")]
    InvalidTestInterval(usize),

    #[error("Invalid batch cap: {0} (must be > 0)")]
    InvalidMaxBatches(usize),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid train fraction: {0} (must be > 0.0 and < 1.0)")]
    InvalidTrainFraction(f64),

    #[error("Invalid class count: {0} (must be >= 2)")]
    InvalidNumClasses(usize),
}
