//! Submission engine
//!
//! Turns a set of candidate files into an analysis submission:
//! 1. Classification - local and project exclusions per file
//! 2. Server filtering - one exclusion query per module
//! 3. Dispatch - hand the batch to the job manager

mod batch;
mod callback;
mod submitter;

pub use batch::{ModuleFiles, SubmissionBatch};
pub use callback::{AnalysisCallback, AnalysisOutcome, NoopCallback};
pub use submitter::{Submitter, SubmitterServices};
