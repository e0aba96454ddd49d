//! Callback that records every report it receives

use super::traits::{CallbackContext, TrainerCallback};
use std::sync::{Arc, Mutex, PoisonError};

/// Which hook produced a report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    TrainBegin,
    Step,
    Validation,
    EpochEnd,
    TrainEnd,
}

/// One recorded event
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub ctx: CallbackContext,
}

/// Records reports into shared storage
///
/// Clones share the same storage, so keep one clone and hand the other to the
/// trainer.
#[derive(Clone, Debug, Default)]
pub struct HistoryCallback {
    reports: Arc<Mutex<Vec<Report>>>,
    record_steps: bool,
}

impl HistoryCallback {
    /// Record everything except per-step reports
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record a report after every training batch
    pub fn with_steps(mut self) -> Self {
        self.record_steps = true;
        self
    }

    /// Snapshot of the reports recorded so far
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reports of one kind
    pub fn of_kind(&self, kind: ReportKind) -> Vec<CallbackContext> {
        self.reports()
            .into_iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.ctx)
            .collect()
    }

    fn record(&self, kind: ReportKind, ctx: &CallbackContext) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Report {
                kind,
                ctx: ctx.clone(),
            });
    }
}

impl TrainerCallback for HistoryCallback {
    fn on_train_begin(&mut self, ctx: &CallbackContext) {
        self.record(ReportKind::TrainBegin, ctx);
    }

    fn on_step_end(&mut self, ctx: &CallbackContext) {
        if self.record_steps {
            self.record(ReportKind::Step, ctx);
        }
    }

    fn on_validation(&mut self, ctx: &CallbackContext) {
        self.record(ReportKind::Validation, ctx);
    }

    fn on_epoch_end(&mut self, ctx: &CallbackContext) {
        self.record(ReportKind::EpochEnd, ctx);
    }

    fn on_train_end(&mut self, ctx: &CallbackContext) {
        self.record(ReportKind::TrainEnd, ctx);
    }

    fn name(&self) -> &'static str {
        "HistoryCallback"
    }
}
