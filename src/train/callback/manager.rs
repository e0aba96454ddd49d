//! Callback manager for dispatching events to multiple callbacks

use super::traits::{CallbackContext, TrainerCallback};

/// Manages multiple callbacks and dispatches events in registration order
#[derive(Default)]
pub struct CallbackManager {
    callbacks: Vec<Box<dyn TrainerCallback>>,
}

impl CallbackManager {
    /// Create new callback manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback
    pub fn add<C: TrainerCallback + 'static>(&mut self, callback: C) {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Names of registered callbacks
    pub fn names(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.name()).collect()
    }

    pub fn on_train_begin(&mut self, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_train_begin(ctx);
        }
    }

    pub fn on_step_end(&mut self, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_step_end(ctx);
        }
    }

    pub fn on_validation(&mut self, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_validation(ctx);
        }
    }

    pub fn on_epoch_end(&mut self, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_epoch_end(ctx);
        }
    }

    pub fn on_train_end(&mut self, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_train_end(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::callback::{HistoryCallback, ProgressCallback, ReportKind};

    #[test]
    fn test_callback_manager_len_and_empty() {
        let mut manager = CallbackManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);

        manager.add(ProgressCallback::new(10));
        assert!(!manager.is_empty());
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.names(), vec!["ProgressCallback"]);
    }

    #[test]
    fn test_callback_manager_dispatches_to_all() {
        let first = HistoryCallback::new();
        let second = HistoryCallback::new();
        let mut manager = CallbackManager::new();
        manager.add(first.clone());
        manager.add(second.clone());

        let ctx = CallbackContext::default();
        manager.on_train_begin(&ctx);
        manager.on_validation(&ctx);
        manager.on_train_end(&ctx);

        for history in [first, second] {
            let kinds: Vec<ReportKind> = history.reports().iter().map(|r| r.kind).collect();
            assert_eq!(
                kinds,
                vec![ReportKind::TrainBegin, ReportKind::Validation, ReportKind::TrainEnd]
            );
        }
    }
}
