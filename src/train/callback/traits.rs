//! Core traits and types for the callback system
//!
//! - `CallbackContext` - State passed to callbacks
//! - `TrainerCallback` - The trait all callbacks implement
//!
//! Callbacks are sinks: they observe progress but cannot steer the loop,
//! which ends only at its batch or epoch cap.

/// Context passed to callbacks with current training state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Total epochs planned
    pub max_epochs: usize,
    /// Batches completed in the current epoch
    pub step: usize,
    /// Batches completed across all epochs
    pub global_step: usize,
    /// Training samples consumed in the current epoch
    pub samples_seen: usize,
    /// Size of the training split
    pub train_size: usize,
    /// Current learning rate
    pub lr: f32,
    /// Running training loss of the current reporting window
    pub train_loss: f32,
    /// Validation loss (if a validation pass just ran)
    pub val_loss: Option<f32>,
    /// Validation accuracy (if a validation pass just ran)
    pub val_accuracy: Option<f32>,
    /// Training duration in seconds
    pub elapsed_secs: f64,
}

/// Trait for training callbacks
///
/// All methods have default no-op implementations, so you only need to
/// implement the events you care about.
pub trait TrainerCallback: Send {
    /// Called before the first epoch
    fn on_train_begin(&mut self, _ctx: &CallbackContext) {}

    /// Called after each training batch
    fn on_step_end(&mut self, _ctx: &CallbackContext) {}

    /// Called after a periodic validation pass inside an epoch
    fn on_validation(&mut self, _ctx: &CallbackContext) {}

    /// Called after the end-of-epoch validation and learning rate decay
    fn on_epoch_end(&mut self, _ctx: &CallbackContext) {}

    /// Called after the final validation pass
    fn on_train_end(&mut self, _ctx: &CallbackContext) {}

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_context_default() {
        let ctx = CallbackContext::default();
        assert_eq!(ctx.epoch, 0);
        assert_eq!(ctx.train_loss, 0.0);
        assert!(ctx.val_loss.is_none());
        assert!(ctx.val_accuracy.is_none());
    }

    #[test]
    fn test_default_trainer_callback_impl() {
        struct MinimalCallback;
        impl TrainerCallback for MinimalCallback {}

        let mut cb = MinimalCallback;
        let ctx = CallbackContext::default();
        cb.on_train_begin(&ctx);
        cb.on_step_end(&ctx);
        cb.on_validation(&ctx);
        cb.on_epoch_end(&ctx);
        cb.on_train_end(&ctx);
        assert_eq!(cb.name(), "TrainerCallback");
    }
}
