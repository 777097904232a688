//! Core types used throughout lint-gate

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A source file known to the editor
///
/// Two files are the same file when their paths are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    /// Create a file handle from a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, used in console messages
    pub fn name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Lowercased extension, if any
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// A build module owning source files
///
/// Modules are identified by name; names are unique within a project.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Module name
    pub name: String,
    /// Root directory of the module
    pub root: PathBuf,
    /// Directories holding test sources
    #[serde(skip)]
    pub test_roots: Vec<PathBuf>,
}

impl Module {
    /// Create a module without test roots
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            test_roots: Vec::new(),
        }
    }

    /// Add a test source directory
    #[must_use]
    pub fn with_test_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.test_roots.push(root.into());
        self
    }

    /// Whether the file lives under one of this module's test roots
    pub fn contains_test_source(&self, file: &SourceFile) -> bool {
        self.test_roots
            .iter()
            .any(|root| file.path().starts_with(root))
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Module {}

impl std::hash::Hash for Module {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Outcome of checking whether a file may be analyzed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionResult {
    /// File may be analyzed
    Included,
    /// File must not be analyzed
    ///
    /// A `None` reason means the exclusion is silent and must not be logged.
    Excluded {
        /// Human-readable cause
        reason: Option<String>,
    },
}

impl ExclusionResult {
    /// Excluded with a reason worth telling the user
    pub fn excluded(reason: impl Into<String>) -> Self {
        Self::Excluded {
            reason: Some(reason.into()),
        }
    }

    /// Excluded without anything to report
    pub const fn silently_excluded() -> Self {
        Self::Excluded { reason: None }
    }

    /// Whether the file was excluded
    pub const fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded { .. })
    }

    /// Reason of the exclusion, if one should be reported
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Included => None,
            Self::Excluded { reason } => reason.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        let file = SourceFile::new("/work/app/src/Main.java");
        assert_eq!(file.name(), "Main.java");
        assert_eq!(file.extension().as_deref(), Some("java"));
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(
            SourceFile::new("lib/Util.PY").extension().as_deref(),
            Some("py")
        );
        assert_eq!(SourceFile::new("Makefile").extension(), None);
    }

    #[test]
    fn test_modules_compare_by_name() {
        let a = Module::new("core", "/work/core");
        let b = Module::new("core", "/elsewhere");
        assert_eq!(a, b);
        assert_ne!(a, Module::new("web", "/work/core"));
    }

    #[test]
    fn test_test_roots() {
        let module = Module::new("core", "/work/core").with_test_root("/work/core/tests");
        assert!(module.contains_test_source(&SourceFile::new("/work/core/tests/it.rs")));
        assert!(!module.contains_test_source(&SourceFile::new("/work/core/src/lib.rs")));
    }

    #[test]
    fn test_silent_exclusion_has_no_reason() {
        let result = ExclusionResult::silently_excluded();
        assert!(result.is_excluded());
        assert_eq!(result.reason(), None);
        assert_eq!(
            ExclusionResult::excluded("file type is not supported").reason(),
            Some("file type is not supported")
        );
        assert!(!ExclusionResult::Included.is_excluded());
    }
}
