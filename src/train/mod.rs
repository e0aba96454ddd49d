//! High-level training loop
//!
//! This module provides a complete training framework with:
//! - Batch encoding (pixel scaling, one-hot targets)
//! - Running metrics and classification accuracy
//! - Exponential learning rate decay
//! - Trainer abstraction
//! - Training configuration
//! - Callback-based progress reporting
//!
//! # Example
//!
//! ```no_run
//! use imgtrain::data::{DatasetLoader, Geometry, IdxLoader};
//! use imgtrain::engine::SoftmaxRegression;
//! use imgtrain::train::{ProgressCallback, TrainConfig, Trainer};
//!
//! let dataset = IdxLoader
//!     .load_dataset("train-images-idx3-ubyte".as_ref(), "train-labels-idx1-ubyte".as_ref())
//!     .unwrap();
//! let config = TrainConfig::default();
//! let (mut train, validation) = dataset.split(config.train_fraction);
//!
//! let engine = SoftmaxRegression::new(Geometry::new(1, 28, 28), 10, config.learning_rate);
//! let mut trainer = Trainer::new(engine, config);
//! trainer.add_callback(ProgressCallback::default());
//! let result = trainer.fit(&mut train, &validation).unwrap();
//! println!("{}", result.final_validation);
//! ```

mod batch;
pub mod callback;
mod config;
mod metrics;
pub mod scheduler;
mod trainer;


pub use batch::{one_hot, scale_pixel, Batch, BatchEncoder, Batches};
pub use callback::{
    CallbackContext, CallbackManager, HistoryCallback, ProgressCallback, ReportKind,
    TrainerCallback,
};
pub use config::TrainConfig;
pub use metrics::{accuracy, argmax, correct_count, moving_average, RunningMetric};
pub use scheduler::{ExponentialDecayLR, LRScheduler};
pub use trainer::{EpochRecord, ScheduleState, TrainResult, Trainer};
