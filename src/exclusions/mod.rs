//! File exclusion rules
//!
//! Decides per file whether it may be analyzed:
//! - Local checks always apply (file type, owning module, ignored directories)
//! - Project checks apply only when the trigger asks for them (project and
//!   module globs, test sources)
//! - Server checks are batched per module, see [`ServerExclusionGateway`]

mod patterns;
mod server;

pub use patterns::{PathPatterns, relative_project_path};
pub use server::{ServerExclusionGateway, ServerFileExclusions};

use crate::config::ProjectSettings;
use crate::error::Result;
use crate::types::{ExclusionResult, Module, SourceFile};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Classifies files as test or main sources
#[derive(Debug, Clone)]
pub struct TestSourcesFilter {
    root: PathBuf,
    patterns: PathPatterns,
}

impl TestSourcesFilter {
    /// Filter using the project's test globs
    pub fn new(root: impl Into<PathBuf>, patterns: &[String]) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            patterns: PathPatterns::new(patterns)?,
        })
    }

    /// Whether `file` is a test source of `module`
    pub fn is_test(&self, file: &SourceFile, module: &Module) -> bool {
        module.contains_test_source(file)
            || self
                .patterns
                .matches(&relative_project_path(&self.root, file.path()))
    }
}

/// Exclusion rules of a project, built from one settings snapshot
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    root: PathBuf,
    extensions: Vec<String>,
    ignored_dirs: Vec<String>,
    analyze_tests: bool,
    file_exclusions: PathPatterns,
    module_exclusions: HashMap<String, PathPatterns>,
    tests: TestSourcesFilter,
}

impl ExclusionPolicy {
    /// Compile the rules of the given settings
    pub fn new(settings: &ProjectSettings) -> Result<Self> {
        let analysis = &settings.analysis;
        let module_exclusions = settings
            .modules
            .iter()
            .filter(|m| !m.exclusions.is_empty())
            .map(|m| PathPatterns::new(&m.exclusions).map(|patterns| (m.name.clone(), patterns)))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self {
            root: settings.root.clone(),
            extensions: analysis.extensions.clone(),
            ignored_dirs: analysis.ignored_dirs.clone(),
            analyze_tests: analysis.analyze_tests,
            file_exclusions: PathPatterns::new(&analysis.file_exclusions)?,
            module_exclusions,
            tests: TestSourcesFilter::new(&settings.root, &analysis.test_patterns)?,
        })
    }

    /// Full classification of a file.
    ///
    /// Local checks run first and short-circuit; project checks follow only
    /// when `check_project_exclusions` is set.
    pub fn classify(
        &self,
        file: &SourceFile,
        module: Option<&Module>,
        check_project_exclusions: bool,
    ) -> ExclusionResult {
        let local = self.can_analyze(file, module);
        if local.is_excluded() || !check_project_exclusions {
            return local;
        }
        self.check_exclusions(file, module)
    }

    /// Local checks, in priority order: unsupported type, no owning module,
    /// ignored directory.
    pub fn can_analyze(&self, file: &SourceFile, module: Option<&Module>) -> ExclusionResult {
        let supported = file
            .extension()
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext));
        if !supported {
            return ExclusionResult::excluded("file type is not supported");
        }

        if module.is_none() {
            return ExclusionResult::excluded("file is not part of any module");
        }

        if self.in_ignored_dir(file.path()) {
            return ExclusionResult::excluded("file is in a generated or ignored directory");
        }

        ExclusionResult::Included
    }

    /// Project checks: project globs, module globs and test sources.
    ///
    /// A missing module yields a silent exclusion.
    pub fn check_exclusions(&self, file: &SourceFile, module: Option<&Module>) -> ExclusionResult {
        let Some(module) = module else {
            return ExclusionResult::silently_excluded();
        };

        let relative = self.relative(file);
        if self.file_exclusions.matches(&relative) {
            return ExclusionResult::excluded("file matches the project file exclusions");
        }

        if self
            .module_exclusions
            .get(&module.name)
            .is_some_and(|patterns| patterns.matches(&relative))
        {
            return ExclusionResult::excluded(format!(
                "file matches the exclusions of module '{}'",
                module.name
            ));
        }

        if !self.analyze_tests && self.tests.is_test(file, module) {
            return ExclusionResult::excluded("test sources are not analyzed automatically");
        }

        ExclusionResult::Included
    }

    /// Whether `file` is a test source of `module`
    pub fn is_test(&self, file: &SourceFile, module: &Module) -> bool {
        self.tests.is_test(file, module)
    }

    fn relative(&self, file: &SourceFile) -> PathBuf {
        relative_project_path(&self.root, file.path())
    }

    fn in_ignored_dir(&self, path: &Path) -> bool {
        // Only directories inside the project count
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        relative.parent().is_some_and(|parent| {
            parent.components().any(|component| {
                let part = component.as_os_str().to_string_lossy();
                self.ignored_dirs.iter().any(|dir| *dir == part)
            })
        })
    }
}
