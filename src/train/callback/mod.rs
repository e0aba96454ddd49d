//! Callback system for training events
//!
//! Provides hooks for training loop events:
//! - `on_train_begin` / `on_train_end`
//! - `on_step_end`
//! - `on_validation` (periodic, inside an epoch)
//! - `on_epoch_end`
//!
//! # Example
//!
//! ```rust
//! use imgtrain::train::callback::{TrainerCallback, CallbackContext};
//!
//! struct PrintCallback;
//!
//! impl TrainerCallback for PrintCallback {
//!     fn on_epoch_end(&mut self, ctx: &CallbackContext) {
//!         println!("Epoch {} finished with val loss {:?}", ctx.epoch, ctx.val_loss);
//!     }
//! }
//! ```

mod history;
mod manager;
mod progress;
mod traits;

pub use history::{HistoryCallback, Report, ReportKind};
pub use manager::CallbackManager;
pub use progress::ProgressCallback;
pub use traits::{CallbackContext, TrainerCallback};
