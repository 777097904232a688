//! Completion callback for submitted analyses
//!
//! The job manager reports the end of an analysis exactly once, either with
//! the files that failed to analyze or with the error that stopped it.

use crate::error::Error;
use crate::types::SourceFile;
use tokio::sync::oneshot;

/// Terminal outcome of a submitted analysis
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Analysis finished; some files may have failed
    Success {
        /// Files the analyzer could not process
        failed_files: Vec<SourceFile>,
    },
    /// Analysis could not run
    Error(Error),
}

/// Receives the outcome of a submitted analysis
///
/// Consumed on completion, so it fires at most once.
pub trait AnalysisCallback: Send {
    /// Called when the analysis ends
    fn on_complete(self: Box<Self>, outcome: AnalysisOutcome);
}

/// Callback for callers that do not wait for the analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallback;

impl AnalysisCallback for NoopCallback {
    fn on_complete(self: Box<Self>, _outcome: AnalysisOutcome) {}
}

/// Forwards the outcome to an awaiting receiver.
///
/// If nothing is dispatched the sender is dropped and the receiver errors.
impl AnalysisCallback for oneshot::Sender<AnalysisOutcome> {
    fn on_complete(self: Box<Self>, outcome: AnalysisOutcome) {
        // Receiver gone means nobody waits for the result
        let _ = (*self).send(outcome);
    }
}
