//! Editor and project structure collaborators

use crate::config::ProjectSettings;
use crate::types::{Module, SourceFile};

/// Source of the files currently open in the editor
pub trait EditorSource: Send + Sync {
    /// Open files, in editor order
    fn open_files(&self) -> Vec<SourceFile>;
}

/// Finds the module owning a file
pub trait ModuleResolver: Send + Sync {
    /// Owning module, or `None` when the file belongs to no module
    fn resolve_module(&self, file: &SourceFile) -> Option<Module>;
}

/// Editor source over a fixed list of files
#[derive(Debug, Clone, Default)]
pub struct StaticEditorSource {
    files: Vec<SourceFile>,
}

impl StaticEditorSource {
    /// Editor with the given files open
    pub const fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }
}

impl EditorSource for StaticEditorSource {
    fn open_files(&self) -> Vec<SourceFile> {
        self.files.clone()
    }
}

/// Module layout declared in the project settings
///
/// A file belongs to the module whose root is its deepest ancestor.
#[derive(Debug, Clone, Default)]
pub struct ProjectLayout {
    modules: Vec<Module>,
}

impl ProjectLayout {
    /// Layout over explicit modules
    pub const fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Layout of the modules declared in `settings`
    pub fn from_settings(settings: &ProjectSettings) -> Self {
        Self::new(settings.resolved_modules())
    }
}

impl ModuleResolver for ProjectLayout {
    fn resolve_module(&self, file: &SourceFile) -> Option<Module> {
        self.modules
            .iter()
            .filter(|module| file.path().starts_with(&module.root))
            .max_by_key(|module| module.root.components().count())
            .cloned()
    }
}
