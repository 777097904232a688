//! Job manager printing the submitted plan instead of running an analyzer

use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use lint_gate::jobs::JobManager;
use lint_gate::submit::{AnalysisCallback, AnalysisOutcome, SubmissionBatch};
use lint_gate::trigger::TriggerType;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Prints each dispatched batch and completes it right away
pub struct PlanPrinter {
    root: PathBuf,
    json: bool,
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    trigger: TriggerType,
    mode: &'a str,
    #[serde(flatten)]
    batch: &'a SubmissionBatch,
}

impl PlanPrinter {
    /// Printer for a project; paths are shown relative to `root`
    pub fn new(root: impl Into<PathBuf>, json: bool) -> Self {
        Self {
            root: root.into(),
            json,
        }
    }

    fn print(&self, batch: &SubmissionBatch, trigger: TriggerType, mode: &str) {
        if self.json {
            let plan = JsonPlan {
                trigger,
                mode,
                batch,
            };
            match serde_json::to_string_pretty(&plan) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("failed to serialize plan: {e}"),
            }
            return;
        }

        println!(
            "{} ({} {})",
            "Submission".emphasis(),
            trigger.accent(),
            mode.muted()
        );
        for entry in batch.files_by_module() {
            println!("  {} {}", "Module".muted(), entry.module.name.accent());
            for file in &entry.files {
                println!("    {} {}", check(), self.display_path(file.path()));
            }
        }
        if !batch.files_to_clear().is_empty() {
            println!("  {}", "Clear previous results".muted());
            for file in batch.files_to_clear() {
                println!("    {} {}", cross(), self.display_path(file.path()));
            }
        }
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl JobManager for PlanPrinter {
    fn submit_manual(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        modal: bool,
        callback: Box<dyn AnalysisCallback>,
    ) {
        self.print(&batch, trigger, if modal { "modal" } else { "foreground" });
        callback.on_complete(AnalysisOutcome::Success {
            failed_files: Vec::new(),
        });
    }

    fn submit_background(
        &self,
        batch: SubmissionBatch,
        trigger: TriggerType,
        callback: Box<dyn AnalysisCallback>,
    ) {
        self.print(&batch, trigger, "background");
        callback.on_complete(AnalysisOutcome::Success {
            failed_files: Vec::new(),
        });
    }
}
