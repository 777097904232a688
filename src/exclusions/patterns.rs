//! Glob patterns matched against project-relative paths

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// A compiled set of path globs
///
/// `*` does not cross directory separators, `**` does.
#[derive(Debug, Clone)]
pub struct PathPatterns {
    set: GlobSet,
    len: usize,
}

impl PathPatterns {
    /// Compile patterns, failing on the first invalid one
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| Error::Config(format!("invalid pattern '{pattern}': {e}")))?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to compile patterns: {e}")))?;

        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    /// Whether no pattern was configured
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any pattern matches the relative path
    pub fn matches(&self, relative: &Path) -> bool {
        self.set.is_match(relative)
    }
}

/// Path of `path` relative to the project root
///
/// Paths outside the project are returned unchanged.
pub fn relative_project_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
