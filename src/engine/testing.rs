//! Deterministic engine for exercising the trainer and evaluator
//!
//! Predicts `(first pixel byte + offset) % num_classes` for every image and
//! reports, as its loss, the fraction of rows whose prediction misses the
//! target. Every call is recorded.

use super::ModelEngine;
use crate::error::{Error, Result};
use crate::train::argmax;
use ndarray::{Array2, Array4};
use std::cell::RefCell;
use std::path::Path;

pub(crate) struct RecordingEngine {
    num_classes: usize,
    offset: usize,
    lr: f32,
    /// Loss returned by the n-th `train_step`, cycling; `[1.0]` by default
    train_losses: Vec<f32>,
    /// `train_step` call index that fails
    fail_at: Option<usize>,
    pub train_sizes: Vec<usize>,
    pub predict_sizes: RefCell<Vec<usize>>,
    pub lr_history: Vec<f32>,
}

impl RecordingEngine {
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            offset: 0,
            lr: 0.0,
            train_losses: vec![1.0],
            fail_at: None,
            train_sizes: Vec::new(),
            predict_sizes: RefCell::new(Vec::new()),
            lr_history: Vec::new(),
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_train_losses(mut self, losses: Vec<f32>) -> Self {
        self.train_losses = losses;
        self
    }

    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }
}

impl ModelEngine for RecordingEngine {
    fn train_step(&mut self, inputs: &Array4<f32>, _targets: &Array2<f32>) -> Result<f32> {
        let call = self.train_sizes.len();
        if self.fail_at == Some(call) {
            return Err(Error::Engine(format!("scripted failure at call {call}")));
        }
        self.train_sizes.push(inputs.shape()[0]);
        Ok(self.train_losses[call % self.train_losses.len()])
    }

    fn predict(&self, inputs: &Array4<f32>) -> Result<Array2<f32>> {
        let n = inputs.shape()[0];
        self.predict_sizes.borrow_mut().push(n);
        let mut out = Array2::zeros((n, self.num_classes));
        for i in 0..n {
            let byte = (inputs[[i, 0, 0, 0]] * 255.0).round() as usize;
            out[[i, (byte + self.offset) % self.num_classes]] = 1.0;
        }
        Ok(out)
    }

    fn loss(&self, targets: &Array2<f32>, predictions: &Array2<f32>) -> Result<f32> {
        let rows = targets.nrows();
        let wrong = targets
            .outer_iter()
            .zip(predictions.outer_iter())
            .filter(|(t, p)| argmax(&t.to_vec()) != argmax(&p.to_vec()))
            .count();
        Ok(wrong as f32 / rows as f32)
    }

    fn learning_rate(&self) -> f32 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f32) {
        self.lr = lr;
        self.lr_history.push(lr);
    }

    fn save(&self, path: &Path) -> Result<()> {
        Err(Error::Persistence(format!(
            "recording engine cannot save to {}",
            path.display()
        )))
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        Err(Error::Persistence(format!(
            "recording engine cannot load {}",
            path.display()
        )))
    }
}
