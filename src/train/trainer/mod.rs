//! Trainer abstraction for training loops
//!
//! This module provides a high-level `Trainer` that orchestrates the training loop,
//! including:
//! - Per-epoch shuffling and batching
//! - Periodic validation on a held-out split
//! - Per-epoch learning rate decay
//! - Reporting through callbacks
//!
//! # Example
//!
//! ```no_run
//! use imgtrain::data::{Dataset, Geometry};
//! use imgtrain::engine::SoftmaxRegression;
//! use imgtrain::train::{ProgressCallback, TrainConfig, Trainer};
//!
//! # fn load() -> Dataset { todo!() }
//! let (mut train, validation) = load().split(0.9);
//! let config = TrainConfig::default().with_seed(42);
//! let engine = SoftmaxRegression::new(Geometry::new(1, 28, 28), 10, config.learning_rate);
//!
//! let mut trainer = Trainer::new(engine, config);
//! trainer.add_callback(ProgressCallback::default());
//! let result = trainer.fit(&mut train, &validation).unwrap();
//! println!("final accuracy {:.4}", result.final_validation.accuracy);
//! ```

mod core;
mod result;
mod train_loop;


pub use core::{ScheduleState, Trainer};
pub use result::{EpochRecord, TrainResult};
