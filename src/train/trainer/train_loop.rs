//! Multi-epoch training loop

use super::core::Trainer;
use super::result::{EpochRecord, TrainResult};
use crate::data::Dataset;
use crate::engine::ModelEngine;
use crate::error::{Error, Result};
use crate::train::scheduler::{ExponentialDecayLR, LRScheduler};
use crate::train::RunningMetric;
use std::time::Instant;

impl<E: ModelEngine> Trainer<E> {
    /// Train on `train`, validating on `validation`
    ///
    /// Each epoch reshuffles `train` in place and walks it in batches of
    /// `batch_size`. Every `test_after_batches` global batches the engine is
    /// validated and the running training loss window restarts. After each
    /// epoch the engine is validated again and the learning rate decays.
    /// Training stops after `max_epochs` epochs or once `max_batches` batches
    /// have run; the epoch in progress at the cap still gets its
    /// end-of-epoch validation and decay. A final validation closes the run.
    ///
    /// Engine errors abort the run immediately.
    pub fn fit(&mut self, train: &mut Dataset, validation: &Dataset) -> Result<TrainResult> {
        if self.config.test_after_batches == 0 {
            return Err(Error::Config("test_after_batches must be positive".into()));
        }
        if self.config.max_batches == 0 {
            return Err(Error::Config("max_batches must be positive".into()));
        }
        if validation.is_empty() {
            return Err(Error::EmptyDataset);
        }

        self.start_time = Some(Instant::now());
        self.scheduler = ExponentialDecayLR::new(
            self.config.learning_rate,
            self.config.decay_rate,
            self.config.min_learning_rate,
        );
        self.state.learning_rate = self.scheduler.get_lr();
        self.state.epoch = 0;
        self.state.global_batch = 0;
        self.engine.set_learning_rate(self.state.learning_rate);

        let train_size = train.len();
        let mut train_loss = RunningMetric::new();
        let mut history = Vec::new();
        let mut hit_batch_cap = false;

        let ctx = self.build_context(0, 0, train_size, 0.0, None);
        self.callbacks.on_train_begin(&ctx);

        for epoch in 0..self.config.max_epochs {
            self.state.epoch = epoch;
            train.shuffle(&mut self.rng)?;

            let mut step = 0;
            let mut samples_seen = 0;
            for batch in self.encoder.batches(train, self.config.batch_size) {
                let batch = batch?;
                let loss = self.engine.train_step(&batch.inputs, &batch.targets)?;
                train_loss.update(loss);
                step += 1;
                samples_seen += batch.size();
                self.state.global_batch += 1;

                let ctx = self.build_context(step, samples_seen, train_size, train_loss.value(), None);
                self.callbacks.on_step_end(&ctx);

                if self.state.global_batch % self.config.test_after_batches == 0 {
                    let eval = self.validate(validation)?;
                    let ctx = self.build_context(
                        step,
                        samples_seen,
                        train_size,
                        train_loss.value(),
                        Some(&eval),
                    );
                    self.callbacks.on_validation(&ctx);
                    train_loss.reset();
                }

                if self.state.global_batch >= self.config.max_batches {
                    hit_batch_cap = true;
                    break;
                }
            }

            let eval = self.validate(validation)?;
            self.scheduler.step();
            self.state.learning_rate = self.scheduler.get_lr();
            self.engine.set_learning_rate(self.state.learning_rate);

            let ctx = self.build_context(step, samples_seen, train_size, train_loss.value(), Some(&eval));
            self.callbacks.on_epoch_end(&ctx);
            history.push(EpochRecord {
                epoch,
                batches: step,
                validation: eval,
                next_learning_rate: self.state.learning_rate,
            });

            if hit_batch_cap {
                break;
            }
        }

        let final_validation = self.validate(validation)?;
        let ctx = self.build_context(0, 0, train_size, train_loss.value(), Some(&final_validation));
        self.callbacks.on_train_end(&ctx);

        Ok(TrainResult {
            epochs: history.len(),
            global_batches: self.state.global_batch,
            hit_batch_cap,
            final_learning_rate: self.state.learning_rate,
            final_validation,
            history,
            elapsed_secs: self.elapsed_secs(),
        })
    }
}
