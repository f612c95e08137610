// src/progress.rs
use crate::runner::GameReport;

/// Lightweight progress reporting for batch validation.
/// Frontends (CLI, or a collector) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of game files to review.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one game file has been reviewed.
    fn item_done(&mut self, _report: &GameReport) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
