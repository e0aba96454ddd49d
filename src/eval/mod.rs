//! Model evaluation
//!
//! Runs an engine over a dataset in batches without touching its parameters
//! and reports batch-size-weighted accuracy alongside the running-average loss.
//!
//! ## Example
//!
//! ```ignore
//! use imgtrain::eval::evaluate;
//!
//! let result = evaluate(&engine, 128, 10, &test_set)?;
//! println!("Accuracy: {:.2}%", result.accuracy * 100.0);
//! ```

mod evaluator;

pub use evaluator::{evaluate, predict_classes, EvalResult};
