//! Exclusions configured on the bound server project

use super::patterns::{PathPatterns, relative_project_path};
use crate::binding::{AnalysisFacade, TestPredicate};
use crate::config::ServerSettings;
use crate::error::Result;
use crate::types::{Module, SourceFile};
use std::path::PathBuf;
use tracing::debug;

/// Server file exclusion settings, compiled
#[derive(Debug, Clone)]
pub struct ServerFileExclusions {
    root: PathBuf,
    exclusions: PathPatterns,
    inclusions: PathPatterns,
    test_exclusions: PathPatterns,
    test_inclusions: PathPatterns,
}

impl ServerFileExclusions {
    /// Compile the synced settings; paths are matched relative to `root`
    pub fn new(root: impl Into<PathBuf>, settings: &ServerSettings) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            exclusions: PathPatterns::new(&settings.exclusions)?,
            inclusions: PathPatterns::new(&settings.inclusions)?,
            test_exclusions: PathPatterns::new(&settings.test_exclusions)?,
            test_inclusions: PathPatterns::new(&settings.test_inclusions)?,
        })
    }

    /// Whether the server settings exclude `file`.
    ///
    /// A file is excluded when inclusions exist and none matches, or when
    /// any exclusion matches. Test files use the test lists.
    pub fn is_excluded(&self, file: &SourceFile, is_test: bool) -> bool {
        let relative = relative_project_path(&self.root, file.path());
        let (inclusions, exclusions) = if is_test {
            (&self.test_inclusions, &self.test_exclusions)
        } else {
            (&self.inclusions, &self.exclusions)
        };

        (!inclusions.is_empty() && !inclusions.matches(&relative)) || exclusions.matches(&relative)
    }
}

/// Asks the facade which files of a module the server excludes
///
/// The underlying check is expensive, so callers query once per module with
/// all of its candidate files.
pub struct ServerExclusionGateway<'a> {
    facade: &'a dyn AnalysisFacade,
}

impl<'a> ServerExclusionGateway<'a> {
    /// Gateway over the given facade
    pub const fn new(facade: &'a dyn AnalysisFacade) -> Self {
        Self { facade }
    }

    /// Subset of `files` excluded by the server configuration.
    ///
    /// Files the facade reports that were not asked about are ignored.
    pub async fn query_excluded(
        &self,
        module: &Module,
        files: &[SourceFile],
        is_test: &TestPredicate<'_>,
    ) -> Result<Vec<SourceFile>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut excluded = self.facade.get_excluded(module, files, is_test).await?;
        excluded.retain(|file| files.contains(file));
        debug!(
            module = %module,
            candidates = files.len(),
            excluded = excluded.len(),
            "server exclusions checked"
        );
        Ok(excluded)
    }
}
