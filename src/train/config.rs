//! Training configuration

use serde::{Deserialize, Serialize};

/// Hyperparameters of a training run
///
/// Every field has a default, so a YAML `training:` section only needs the
/// values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    /// Samples per training batch
    pub batch_size: usize,
    /// Samples per validation batch
    pub eval_batch_size: usize,
    /// Initial learning rate
    pub learning_rate: f32,
    /// Multiplier applied to the learning rate after each epoch
    pub decay_rate: f32,
    /// Floor for the decayed learning rate
    pub min_learning_rate: f32,
    /// Validate every N global batches
    pub test_after_batches: usize,
    /// Hard cap on training batches across all epochs
    pub max_batches: usize,
    /// Maximum number of epochs
    pub max_epochs: usize,
    /// Share of the loaded data used for training; the rest validates
    pub train_fraction: f64,
    /// Number of output classes
    pub num_classes: usize,
    /// Seed for shuffling; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            batch_size: 128,
            eval_batch_size: 128,
            learning_rate: 0.1,
            decay_rate: 0.8,
            min_learning_rate: 0.001,
            test_after_batches: 50,
            max_batches: 10_000,
            max_epochs: 5,
            train_fraction: 0.9,
            num_classes: 10,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_eval_batch_size(mut self, batch_size: usize) -> Self {
        self.eval_batch_size = batch_size;
        self
    }

    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Set decay factor and floor together
    pub fn with_decay(mut self, decay_rate: f32, min_learning_rate: f32) -> Self {
        self.decay_rate = decay_rate;
        self.min_learning_rate = min_learning_rate;
        self
    }

    pub fn with_test_after_batches(mut self, n: usize) -> Self {
        self.test_after_batches = n;
        self
    }

    pub fn with_max_batches(mut self, n: usize) -> Self {
        self.max_batches = n;
        self
    }

    pub fn with_max_epochs(mut self, n: usize) -> Self {
        self.max_epochs = n;
        self
    }

    pub fn with_train_fraction(mut self, fraction: f64) -> Self {
        self.train_fraction = fraction;
        self
    }

    pub fn with_num_classes(mut self, n: usize) -> Self {
        self.num_classes = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
