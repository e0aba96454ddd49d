//! Training statistics
//!
//! - Running (incremental) averages of per-batch scalars such as loss
//! - Classification accuracy over prediction rows

mod classification;
mod running;


pub use classification::{accuracy, argmax, correct_count};
pub use running::{moving_average, RunningMetric};
