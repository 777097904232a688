//! Common test utilities for lint-gate tests

pub mod fixtures;
pub mod mocks;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::{
    JobCall, MockBindings, MockFacade, MutableSettings, RecordingConsole, RecordingJobs,
};
