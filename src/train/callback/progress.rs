//! Progress callback for logging training progress

use super::traits::{CallbackContext, TrainerCallback};

/// Logs training milestones through `tracing`
///
/// Validation and epoch reports are emitted at `INFO`; every `log_interval`
/// training batches a `DEBUG` line carries the running loss.
#[derive(Clone, Debug)]
pub struct ProgressCallback {
    /// Log every N steps
    log_interval: usize,
}

impl ProgressCallback {
    /// Create progress callback
    pub fn new(log_interval: usize) -> Self {
        Self { log_interval }
    }
}

impl Default for ProgressCallback {
    fn default() -> Self {
        Self { log_interval: 10 }
    }
}

impl TrainerCallback for ProgressCallback {
    fn on_train_begin(&mut self, ctx: &CallbackContext) {
        tracing::info!(
            train_size = ctx.train_size,
            max_epochs = ctx.max_epochs,
            lr = ctx.lr,
            "begin training"
        );
    }

    fn on_step_end(&mut self, ctx: &CallbackContext) {
        if self.log_interval > 0 && ctx.step % self.log_interval == 0 {
            tracing::debug!(
                epoch = ctx.epoch,
                step = ctx.step,
                train_loss = ctx.train_loss,
                "step"
            );
        }
    }

    fn on_validation(&mut self, ctx: &CallbackContext) {
        tracing::info!(
            "sample: {}/{}, lr: {:.6}, train_loss: {:.6}, val_loss: {:.6}, val_accuracy: {:.4}%",
            ctx.samples_seen,
            ctx.train_size,
            ctx.lr,
            ctx.train_loss,
            ctx.val_loss.unwrap_or(f32::NAN),
            ctx.val_accuracy.unwrap_or(f32::NAN) * 100.0
        );
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) {
        tracing::info!(
            "epoch[{}] val_loss: {:.6}, val_accuracy: {:.4}%, next lr: {:.6} ({:.1}s)",
            ctx.epoch,
            ctx.val_loss.unwrap_or(f32::NAN),
            ctx.val_accuracy.unwrap_or(f32::NAN) * 100.0,
            ctx.lr,
            ctx.elapsed_secs
        );
    }

    fn on_train_end(&mut self, ctx: &CallbackContext) {
        tracing::info!(
            "final val_loss: {:.6}, final val_accuracy: {:.4}% after {} batches",
            ctx.val_loss.unwrap_or(f32::NAN),
            ctx.val_accuracy.unwrap_or(f32::NAN) * 100.0,
            ctx.global_step
        );
    }

    fn name(&self) -> &'static str {
        "ProgressCallback"
    }
}
