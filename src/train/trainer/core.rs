//! Core Trainer struct and basic methods

use crate::data::Dataset;
use crate::engine::ModelEngine;
use crate::error::Result;
use crate::eval::{evaluate, EvalResult};
use crate::train::callback::{CallbackContext, CallbackManager, TrainerCallback};
use crate::train::scheduler::ExponentialDecayLR;
use crate::train::{BatchEncoder, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Progress of the current run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduleState {
    /// Learning rate in effect for the next training batch
    pub learning_rate: f32,
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Training batches completed across all epochs
    pub global_batch: usize,
}

/// High-level trainer that orchestrates the training loop
///
/// The trainer owns the engine, the shuffling RNG, and the schedule state for
/// the whole run; datasets are only borrowed by [`Trainer::fit`].
pub struct Trainer<E: ModelEngine> {
    /// Model engine
    pub(crate) engine: E,

    /// Training configuration
    pub(crate) config: TrainConfig,

    /// Callback manager
    pub(crate) callbacks: CallbackManager,

    pub(crate) encoder: BatchEncoder,

    /// Shuffle source, seeded from the config when a seed is given
    pub(crate) rng: StdRng,

    pub(crate) scheduler: ExponentialDecayLR,

    pub(crate) state: ScheduleState,

    /// Training start time
    pub(crate) start_time: Option<Instant>,
}

impl<E: ModelEngine> Trainer<E> {
    /// Create a new trainer
    pub fn new(engine: E, config: TrainConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            engine,
            encoder: BatchEncoder::new(config.num_classes),
            scheduler: ExponentialDecayLR::new(
                config.learning_rate,
                config.decay_rate,
                config.min_learning_rate,
            ),
            state: ScheduleState {
                learning_rate: config.learning_rate,
                ..Default::default()
            },
            config,
            callbacks: CallbackManager::new(),
            rng,
            start_time: None,
        }
    }

    /// Replace the shuffle source
    ///
    /// Use this to continue a stream that already produced an earlier
    /// shuffle, so epoch shuffles never replay its draws.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Add a callback to the trainer
    pub fn add_callback<C: TrainerCallback + 'static>(&mut self, callback: C) {
        self.callbacks.add(callback);
    }

    /// Get the training configuration
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Give up the trainer and keep the trained engine
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Current schedule state
    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// Evaluate the engine on `dataset` with the configured eval batch size
    pub fn validate(&self, dataset: &Dataset) -> Result<EvalResult> {
        evaluate(
            &self.engine,
            self.config.eval_batch_size,
            self.config.num_classes,
            dataset,
        )
    }

    /// Seconds since `fit` started
    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Build callback context from the current state
    pub(crate) fn build_context(
        &self,
        step: usize,
        samples_seen: usize,
        train_size: usize,
        train_loss: f32,
        validation: Option<&EvalResult>,
    ) -> CallbackContext {
        CallbackContext {
            epoch: self.state.epoch,
            max_epochs: self.config.max_epochs,
            step,
            global_step: self.state.global_batch,
            samples_seen,
            train_size,
            lr: self.state.learning_rate,
            train_loss,
            val_loss: validation.map(|v| v.loss),
            val_accuracy: validation.map(|v| v.accuracy),
            elapsed_secs: self.elapsed_secs(),
        }
    }
}
