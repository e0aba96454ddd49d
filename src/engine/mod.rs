//! Model engine abstraction
//!
//! The trainer and evaluator never touch network internals; they drive an
//! engine through this capability trait. Every call is synchronous.
//!
//! - `SoftmaxRegression` - single dense layer + softmax, trained with SGD

mod softmax;

#[cfg(test)]
pub(crate) mod testing;

pub use softmax::{ModelState, SoftmaxRegression, ARCHITECTURE};

use crate::error::Result;
use ndarray::{Array2, Array4};
use std::path::Path;

/// Forward/backward computation and parameter storage
pub trait ModelEngine {
    /// One forward + backward + parameter update pass; returns the batch loss
    fn train_step(&mut self, inputs: &Array4<f32>, targets: &Array2<f32>) -> Result<f32>;

    /// Forward pass only; output has the same shape as the targets would
    fn predict(&self, inputs: &Array4<f32>) -> Result<Array2<f32>>;

    /// Loss of `predictions` against one-hot `targets`
    fn loss(&self, targets: &Array2<f32>, predictions: &Array2<f32>) -> Result<f32>;

    /// Get learning rate
    fn learning_rate(&self) -> f32;

    /// Set learning rate used by subsequent `train_step` calls
    fn set_learning_rate(&mut self, lr: f32);

    /// Persist parameters; either the whole file is written or nothing is
    fn save(&self, path: &Path) -> Result<()>;

    /// Replace parameters from `path`; on failure the engine is unchanged
    fn load(&mut self, path: &Path) -> Result<()>;
}

impl<E: ModelEngine + ?Sized> ModelEngine for Box<E> {
    fn train_step(&mut self, inputs: &Array4<f32>, targets: &Array2<f32>) -> Result<f32> {
        (**self).train_step(inputs, targets)
    }

    fn predict(&self, inputs: &Array4<f32>) -> Result<Array2<f32>> {
        (**self).predict(inputs)
    }

    fn loss(&self, targets: &Array2<f32>, predictions: &Array2<f32>) -> Result<f32> {
        (**self).loss(targets, predictions)
    }

    fn learning_rate(&self) -> f32 {
        (**self).learning_rate()
    }

    fn set_learning_rate(&mut self, lr: f32) {
        (**self).set_learning_rate(lr);
    }

    fn save(&self, path: &Path) -> Result<()> {
        (**self).save(path)
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        (**self).load(path)
    }
}
