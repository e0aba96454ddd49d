//! imgtrain: image classifier training and evaluation
//!
//! Drives a model engine through a classic supervised loop over labeled
//! 8-bit images:
//!
//! - [`data`] - IDX loading, datasets, shuffling, and train/validation splits
//! - [`train`] - batch encoding, metrics, learning rate decay, and the [`Trainer`]
//! - [`eval`] - batched evaluation and single-image prediction
//! - [`engine`] - the [`ModelEngine`] trait and a softmax regression engine
//! - [`config`] - YAML run specs, validation, and CLI arguments
//! - [`run`] - train/test/predict entry points used by the CLI

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod eval;
pub mod run;
pub mod train;

pub use engine::ModelEngine;
pub use error::{Error, Result};
pub use train::{TrainConfig, Trainer};
