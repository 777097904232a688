//! Submit and auto commands

use crate::cli::PlanPrinter;
use crate::cli::style::{Stylize, check};
use anstream::{eprintln, println};
use lint_gate::binding::ProjectBindingManager;
use lint_gate::config::{
    GlobalSettings, ProjectConfigFile, SettingsProvider, default_global_settings_path,
    load_global_settings,
};
use lint_gate::console::TracingConsole;
use lint_gate::error::Result;
use lint_gate::submit::{AnalysisOutcome, Submitter, SubmitterServices};
use lint_gate::trigger::TriggerType;
use lint_gate::types::SourceFile;
use lint_gate::workspace::{ProjectLayout, StaticEditorSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Options for the submit command
#[derive(Debug, Clone, Copy)]
pub struct SubmitOptions {
    /// What caused the submission
    pub trigger: TriggerType,
    /// Run in background instead of foreground
    pub background: bool,
    /// Run modal, ignoring project and server exclusions
    pub modal: bool,
    /// Print the plan as JSON
    pub json: bool,
}

/// Run the submit command
pub async fn run_submit(
    path: &Path,
    settings_path: Option<&Path>,
    files: &[PathBuf],
    options: SubmitOptions,
) -> Result<()> {
    let files = source_files(path, files);
    let (submitter, _) = build_submitter(path, settings_path, Vec::new(), options.json)?;

    let (tx, rx) = oneshot::channel();
    if options.modal {
        submitter
            .submit_files_modal(&files, options.trigger, Box::new(tx))
            .await?;
    } else {
        submitter
            .submit_files(&files, options.trigger, options.background, Box::new(tx))
            .await?;
    }

    match rx.await {
        Ok(AnalysisOutcome::Success { failed_files }) if failed_files.is_empty() => {
            if !options.json {
                println!("{} Submitted", check());
            }
        }
        Ok(AnalysisOutcome::Success { failed_files }) => {
            eprintln!("{}", "Some files could not be analyzed:".failure());
            for file in failed_files {
                eprintln!("  {file}");
            }
        }
        Ok(AnalysisOutcome::Error(e)) => return Err(e),
        Err(_) => {
            if !options.json {
                println!("{}", "Nothing submitted".muted());
            }
        }
    }

    Ok(())
}

/// Run the auto command: treat `files` as the open editors
pub async fn run_auto(
    path: &Path,
    settings_path: Option<&Path>,
    files: &[PathBuf],
    trigger: TriggerType,
    json: bool,
) -> Result<()> {
    let open_files = source_files(path, files);
    let (submitter, global) = build_submitter(path, settings_path, open_files, json)?;

    if !global.auto_trigger && !json {
        println!("{}", "Automatic analysis is disabled".muted());
    }

    submitter.submit_open_files_auto(trigger, &global).await
}

fn build_submitter(
    path: &Path,
    settings_path: Option<&Path>,
    open_files: Vec<SourceFile>,
    json: bool,
) -> Result<(Submitter, GlobalSettings)> {
    let settings_path = settings_path
        .map(Path::to_path_buf)
        .or_else(default_global_settings_path);
    let global = load_global_settings(settings_path.as_deref())?;

    let settings: Arc<dyn SettingsProvider> = Arc::new(ProjectConfigFile::new(path));
    let layout = ProjectLayout::from_settings(&settings.project_settings()?);

    let submitter = Submitter::new(SubmitterServices {
        settings: Arc::clone(&settings),
        editor: Arc::new(StaticEditorSource::new(open_files)),
        modules: Arc::new(layout),
        bindings: Arc::new(ProjectBindingManager::new(settings, global.clone())),
        jobs: Arc::new(PlanPrinter::new(path, json)),
        console: Arc::new(TracingConsole),
    });

    Ok((submitter, global))
}

fn source_files(root: &Path, files: &[PathBuf]) -> Vec<SourceFile> {
    files
        .iter()
        .map(|file| SourceFile::new(root.join(file)))
        .collect()
}
