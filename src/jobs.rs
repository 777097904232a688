//! Analysis job execution seam

use crate::submit::{AnalysisCallback, SubmissionBatch};
use crate::trigger::TriggerType;

/// Runs analyses of submitted batches
///
/// Both methods hand the batch off and return; the callback fires when the
/// analysis ends, on a thread owned by the implementation.
pub trait JobManager: Send + Sync {
    /// Run in foreground, consuming the single execution slot.
    ///
    /// `modal` additionally blocks the user until the analysis ends.
    fn submit_manual(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        modal: bool,
        callback: Box<dyn AnalysisCallback>,
    );

    /// Run in background
    fn submit_background(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        callback: Box<dyn AnalysisCallback>,
    );
}
