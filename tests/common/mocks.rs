//! Recording doubles for the submitter's collaborators

#![allow(dead_code)]

use async_trait::async_trait;
use lint_gate::binding::{AnalysisFacade, BindingProvider, TestPredicate};
use lint_gate::config::{ProjectSettings, SettingsProvider};
use lint_gate::console::Console;
use lint_gate::error::{Error, Result};
use lint_gate::jobs::JobManager;
use lint_gate::submit::{AnalysisCallback, AnalysisOutcome, SubmissionBatch};
use lint_gate::trigger::TriggerType;
use lint_gate::types::{Module, SourceFile};
use std::sync::{Arc, Mutex};

/// Console keeping every line
#[derive(Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn debug(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Settings that tests can change between submissions
pub struct MutableSettings {
    settings: Mutex<ProjectSettings>,
    reads: Mutex<usize>,
}

impl MutableSettings {
    pub fn new(settings: ProjectSettings) -> Self {
        Self {
            settings: Mutex::new(settings),
            reads: Mutex::new(0),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut ProjectSettings)) {
        f(&mut *self.settings.lock().unwrap());
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl SettingsProvider for MutableSettings {
    fn project_settings(&self) -> Result<ProjectSettings> {
        *self.reads.lock().unwrap() += 1;
        Ok(self.settings.lock().unwrap().clone())
    }
}

/// Facade excluding a fixed set of files and recording each query
#[derive(Default)]
pub struct MockFacade {
    excluded: Mutex<Vec<SourceFile>>,
    fail_with: Mutex<Option<String>>,
    queries: Mutex<Vec<(String, Vec<SourceFile>, Vec<bool>)>>,
}

impl MockFacade {
    pub fn excluding(files: Vec<SourceFile>) -> Self {
        Self {
            excluded: Mutex::new(files),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Mutex::new(Some(message.to_string())),
            ..Self::default()
        }
    }

    /// Module name, files asked about, and the test classification of each
    pub fn queries(&self) -> Vec<(String, Vec<SourceFile>, Vec<bool>)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisFacade for MockFacade {
    async fn get_excluded(
        &self,
        module: &Module,
        files: &[SourceFile],
        is_test: &TestPredicate<'_>,
    ) -> Result<Vec<SourceFile>> {
        self.queries.lock().unwrap().push((
            module.name.clone(),
            files.to_vec(),
            files.iter().map(is_test).collect(),
        ));

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(Error::Facade(message));
        }

        let excluded = self.excluded.lock().unwrap();
        Ok(files
            .iter()
            .filter(|f| excluded.contains(f))
            .cloned()
            .collect())
    }
}

/// Binding provider returning a shared mock facade, or an invalid binding
pub struct MockBindings {
    facade: Arc<MockFacade>,
    invalid: bool,
    requests: Mutex<usize>,
}

impl MockBindings {
    pub fn new(facade: Arc<MockFacade>) -> Self {
        Self {
            facade,
            invalid: false,
            requests: Mutex::new(0),
        }
    }

    pub fn invalid() -> Self {
        Self {
            facade: Arc::new(MockFacade::default()),
            invalid: true,
            requests: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

#[async_trait]
impl BindingProvider for MockBindings {
    async fn facade(&self) -> Result<Arc<dyn AnalysisFacade>> {
        *self.requests.lock().unwrap() += 1;
        if self.invalid {
            return Err(Error::InvalidBinding(
                "project is bound to unknown connection 'prod'".to_string(),
            ));
        }
        Ok(Arc::clone(&self.facade) as Arc<dyn AnalysisFacade>)
    }
}

/// A recorded call to the job manager
#[derive(Debug, Clone)]
pub struct JobCall {
    pub batch: SubmissionBatch,
    pub trigger: TriggerType,
    /// `None` for background, `Some(modal)` for foreground
    pub manual: Option<bool>,
}

/// Job manager recording batches and completing them successfully
#[derive(Default)]
pub struct RecordingJobs {
    calls: Mutex<Vec<JobCall>>,
}

impl RecordingJobs {
    pub fn calls(&self) -> Vec<JobCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn single_call(&self) -> JobCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one dispatch");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, call: JobCall, callback: Box<dyn AnalysisCallback>) {
        self.calls.lock().unwrap().push(call);
        callback.on_complete(AnalysisOutcome::Success {
            failed_files: Vec::new(),
        });
    }
}

impl JobManager for RecordingJobs {
    fn submit_manual(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        modal: bool,
        callback: Box<dyn AnalysisCallback>,
    ) {
        self.record(
            JobCall {
                batch,
                trigger,
                manual: Some(modal),
            },
            callback,
        );
    }

    fn submit_background(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        callback: Box<dyn AnalysisCallback>,
    ) {
        self.record(
            JobCall {
                batch,
                trigger,
                manual: None,
            },
            callback,
        );
    }
}
