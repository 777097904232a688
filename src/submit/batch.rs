//! Files of one submission, grouped by module

use crate::types::{Module, SourceFile};
use serde::Serialize;

/// Files of one module to analyze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleFiles {
    /// Owning module
    pub module: Module,
    /// Files in arrival order, without duplicates
    pub files: Vec<SourceFile>,
}

/// Outcome of filtering one submission
///
/// Modules keep the order in which their first file arrived. A file is
/// either in a module's list or in the clear list, never both, and modules
/// never have an empty file list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionBatch {
    files_by_module: Vec<ModuleFiles>,
    files_to_clear: Vec<SourceFile>,
}

impl SubmissionBatch {
    /// Empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `file` for analysis in `module`
    pub fn add_file(&mut self, module: &Module, file: SourceFile) {
        if self.files_to_clear.contains(&file) {
            return;
        }

        match self.files_by_module.iter_mut().find(|e| e.module == *module) {
            Some(entry) => {
                if !entry.files.contains(&file) {
                    entry.files.push(file);
                }
            }
            None => self.files_by_module.push(ModuleFiles {
                module: module.clone(),
                files: vec![file],
            }),
        }
    }

    /// Schedule `file` for clearing of its previous results
    pub fn clear_file(&mut self, file: SourceFile) {
        for entry in &mut self.files_by_module {
            entry.files.retain(|f| *f != file);
        }
        self.files_by_module.retain(|e| !e.files.is_empty());

        if !self.files_to_clear.contains(&file) {
            self.files_to_clear.push(file);
        }
    }

    /// Move `files` of `module` to the clear list, dropping the module when
    /// nothing is left to analyze
    pub fn move_to_clear(&mut self, module: &Module, files: &[SourceFile]) {
        let Some(index) = self.files_by_module.iter().position(|e| e.module == *module) else {
            return;
        };

        let entry = &mut self.files_by_module[index];
        entry.files.retain(|f| !files.contains(f));
        if entry.files.is_empty() {
            self.files_by_module.remove(index);
        }

        for file in files {
            if !self.files_to_clear.contains(file) {
                self.files_to_clear.push(file.clone());
            }
        }
    }

    /// Snapshot of the modules in the batch
    pub fn modules(&self) -> Vec<Module> {
        self.files_by_module.iter().map(|e| e.module.clone()).collect()
    }

    /// Files scheduled for analysis in `module`
    pub fn files_of(&self, module: &Module) -> Option<&[SourceFile]> {
        self.files_by_module
            .iter()
            .find(|e| e.module == *module)
            .map(|e| e.files.as_slice())
    }

    /// Files to analyze, per module
    pub fn files_by_module(&self) -> &[ModuleFiles] {
        &self.files_by_module
    }

    /// Files whose previous results must be cleared
    pub fn files_to_clear(&self) -> &[SourceFile] {
        &self.files_to_clear
    }

    /// Number of files to analyze
    pub fn file_count(&self) -> usize {
        self.files_by_module.iter().map(|e| e.files.len()).sum()
    }

    /// Whether nothing is to be analyzed or cleared
    pub fn is_empty(&self) -> bool {
        self.files_by_module.is_empty() && self.files_to_clear.is_empty()
    }
}
