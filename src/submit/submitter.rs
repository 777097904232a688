//! Submission coordinator

use crate::binding::{AnalysisFacade, BindingProvider};
use crate::config::{GlobalSettings, SettingsProvider};
use crate::console::Console;
use crate::error::Result;
use crate::exclusions::{ExclusionPolicy, ServerExclusionGateway};
use crate::jobs::JobManager;
use crate::submit::{AnalysisCallback, NoopCallback, SubmissionBatch};
use crate::trigger::{DispatchMode, TriggerType};
use crate::types::{ExclusionResult, SourceFile};
use crate::workspace::{EditorSource, ModuleResolver};
use std::sync::Arc;
use tracing::debug;

const SERVER_EXCLUSION_MESSAGE: &str =
    "not automatically analyzed due to exclusions configured in the bound project";

/// Collaborators used by a [`Submitter`]
#[derive(Clone)]
pub struct SubmitterServices {
    /// Current project settings
    pub settings: Arc<dyn SettingsProvider>,
    /// Files open in the editor
    pub editor: Arc<dyn EditorSource>,
    /// Module lookup
    pub modules: Arc<dyn ModuleResolver>,
    /// Binding of the project
    pub bindings: Arc<dyn BindingProvider>,
    /// Analysis execution
    pub jobs: Arc<dyn JobManager>,
    /// User-facing console
    pub console: Arc<dyn Console>,
}

/// Filters candidate files and submits the eligible ones for analysis
///
/// Every submission builds its own [`SubmissionBatch`]; concurrent
/// submissions do not share state.
pub struct Submitter {
    services: SubmitterServices,
}

impl Submitter {
    /// Create a submitter over the given collaborators
    pub const fn new(services: SubmitterServices) -> Self {
        Self { services }
    }

    /// Submit the files open in the editor, in background.
    ///
    /// Does nothing when automatic analysis is disabled.
    pub async fn submit_open_files_auto(
        &self,
        trigger: TriggerType,
        global: &GlobalSettings,
    ) -> Result<()> {
        if !global.auto_trigger {
            debug!(%trigger, "automatic analysis disabled, skipping");
            return Ok(());
        }

        let files = self.services.editor.open_files();
        self.submit_files(&files, trigger, true, Box::new(NoopCallback))
            .await
    }

    /// Submit files requested explicitly by the user.
    ///
    /// Runs in foreground, modal, and consumes the single execution slot.
    /// Project and server exclusions are not applied.
    pub async fn submit_files_modal(
        &self,
        files: &[SourceFile],
        trigger: TriggerType,
        callback: Box<dyn AnalysisCallback>,
    ) -> Result<()> {
        self.submit(files, trigger, false, DispatchMode::Modal, callback)
            .await
    }

    /// Submit files for analysis.
    ///
    /// Project and server exclusions apply unless the trigger is an explicit
    /// user action. `background` selects background or foreground execution.
    pub async fn submit_files(
        &self,
        files: &[SourceFile],
        trigger: TriggerType,
        background: bool,
        callback: Box<dyn AnalysisCallback>,
    ) -> Result<()> {
        self.submit(
            files,
            trigger,
            trigger.requires_exclusion_check(),
            DispatchMode::from_background_flag(background),
            callback,
        )
        .await
    }

    /// Filter `files` into a batch without dispatching it
    ///
    /// Fails with an invalid binding error when the binding cannot be
    /// resolved, even if the server is not queried.
    pub async fn build_batch(
        &self,
        files: &[SourceFile],
        check_exclusions: bool,
    ) -> Result<SubmissionBatch> {
        let settings = self.services.settings.project_settings()?;
        let policy = ExclusionPolicy::new(&settings)?;
        let facade = self.services.bindings.facade().await?;
        let mut batch = SubmissionBatch::new();

        for file in files {
            let module = self.services.modules.resolve_module(file);
            match (policy.classify(file, module.as_ref(), check_exclusions), module) {
                (ExclusionResult::Included, Some(module)) => batch.add_file(&module, file.clone()),
                (result, _) => {
                    if let Some(reason) = result.reason() {
                        self.log_exclusion(file, &format!("excluded: {reason}"));
                    }
                    batch.clear_file(file.clone());
                }
            }
        }

        if check_exclusions {
            self.filter_server_exclusions(facade.as_ref(), &policy, &mut batch)
                .await?;
        }

        Ok(batch)
    }

    async fn submit(
        &self,
        files: &[SourceFile],
        trigger: TriggerType,
        check_exclusions: bool,
        mode: DispatchMode,
        callback: Box<dyn AnalysisCallback>,
    ) -> Result<()> {
        let batch = match self.build_batch(files, check_exclusions).await {
            Ok(batch) => batch,
            Err(e) if e.is_invalid_binding() => {
                // The binding layer already told the user
                debug!(error = %e, "submission aborted");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if files.is_empty() {
            return Ok(());
        }

        self.services.console.debug(&format!("Trigger: {trigger}"));
        debug!(
            %trigger,
            modules = batch.files_by_module().len(),
            files = batch.file_count(),
            cleared = batch.files_to_clear().len(),
            ?mode,
            "dispatching submission"
        );

        let jobs = &self.services.jobs;
        match mode {
            DispatchMode::Background => jobs.submit_background(batch, trigger, callback),
            DispatchMode::Foreground => jobs.submit_manual(batch, trigger, false, callback),
            DispatchMode::Modal => jobs.submit_manual(batch, trigger, true, callback),
        }
        Ok(())
    }

    /// Query server exclusions once per module and move excluded files to
    /// the clear list
    async fn filter_server_exclusions(
        &self,
        facade: &dyn AnalysisFacade,
        policy: &ExclusionPolicy,
        batch: &mut SubmissionBatch,
    ) -> Result<()> {
        let gateway = ServerExclusionGateway::new(facade);

        // Modules may leave the batch while we go, so walk a snapshot
        for module in batch.modules() {
            let Some(files) = batch.files_of(&module) else {
                continue;
            };
            let is_test = |file: &SourceFile| policy.is_test(file, &module);
            let excluded = gateway.query_excluded(&module, files, &is_test).await?;

            for file in &excluded {
                self.log_exclusion(file, SERVER_EXCLUSION_MESSAGE);
            }
            batch.move_to_clear(&module, &excluded);
        }

        Ok(())
    }

    fn log_exclusion(&self, file: &SourceFile, reason: &str) {
        self.services
            .console
            .debug(&format!("File '{}' {reason}", file.name()));
    }
}
