//! Project binding and the analysis facade
//!
//! A project is either standalone or bound to a server project through a
//! named connection. The facade answers questions that depend on that
//! binding, such as which files the server project excludes.

use crate::config::{GlobalSettings, ProjectSettings, SettingsProvider};
use crate::error::{Error, Result};
use crate::exclusions::ServerFileExclusions;
use crate::types::{Module, SourceFile};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Predicate telling whether a file is a test source
pub type TestPredicate<'a> = dyn Fn(&SourceFile) -> bool + Send + Sync + 'a;

/// Analysis facade of the current binding
#[async_trait]
pub trait AnalysisFacade: Send + Sync {
    /// Files among `files` that the server configuration excludes.
    ///
    /// May be slow (network or engine bound); call once per module.
    async fn get_excluded(
        &self,
        module: &Module,
        files: &[SourceFile],
        is_test: &TestPredicate<'_>,
    ) -> Result<Vec<SourceFile>>;
}

/// Resolves the facade for the project's current binding
#[async_trait]
pub trait BindingProvider: Send + Sync {
    /// Facade of the current binding.
    ///
    /// Fails with [`Error::InvalidBinding`] when the project is bound to a
    /// connection that does not exist or to no project.
    async fn facade(&self) -> Result<Arc<dyn AnalysisFacade>>;
}

/// Facade of an unbound project: the server never excludes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneFacade;

#[async_trait]
impl AnalysisFacade for StandaloneFacade {
    async fn get_excluded(
        &self,
        _module: &Module,
        _files: &[SourceFile],
        _is_test: &TestPredicate<'_>,
    ) -> Result<Vec<SourceFile>> {
        Ok(Vec::new())
    }
}

/// Facade of a project bound to a server project
#[derive(Debug, Clone)]
pub struct ConnectedFacade {
    project_key: String,
    server_url: String,
    exclusions: ServerFileExclusions,
}

impl ConnectedFacade {
    /// Facade applying the given server exclusions
    pub fn new(
        project_key: impl Into<String>,
        server_url: impl Into<String>,
        exclusions: ServerFileExclusions,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            server_url: server_url.into(),
            exclusions,
        }
    }
}

#[async_trait]
impl AnalysisFacade for ConnectedFacade {
    async fn get_excluded(
        &self,
        module: &Module,
        files: &[SourceFile],
        is_test: &TestPredicate<'_>,
    ) -> Result<Vec<SourceFile>> {
        debug!(
            project_key = %self.project_key,
            server = %self.server_url,
            module = %module,
            files = files.len(),
            "applying server file exclusions"
        );
        Ok(files
            .iter()
            .filter(|&file| self.exclusions.is_excluded(file, is_test(file)))
            .cloned()
            .collect())
    }
}

/// Create the facade matching the project's binding
pub fn create_facade(
    project: &ProjectSettings,
    global: &GlobalSettings,
) -> Result<Arc<dyn AnalysisFacade>> {
    let Some(binding) = &project.binding else {
        return Ok(Arc::new(StandaloneFacade));
    };

    if binding.project_key.is_empty() {
        return Err(Error::InvalidBinding(format!(
            "project is bound to connection '{}' but no project key is set",
            binding.connection
        )));
    }

    let connection = global.connection(&binding.connection).ok_or_else(|| {
        Error::InvalidBinding(format!(
            "project is bound to unknown connection '{}'",
            binding.connection
        ))
    })?;

    let exclusions = ServerFileExclusions::new(&project.root, &binding.server_settings)?;
    Ok(Arc::new(ConnectedFacade::new(
        binding.project_key.clone(),
        connection.url.clone(),
        exclusions,
    )))
}

/// Binding provider reading the project settings on every request
pub struct ProjectBindingManager {
    settings: Arc<dyn SettingsProvider>,
    global: GlobalSettings,
}

impl ProjectBindingManager {
    /// Binding manager for a project
    pub fn new(settings: Arc<dyn SettingsProvider>, global: GlobalSettings) -> Self {
        Self { settings, global }
    }
}

#[async_trait]
impl BindingProvider for ProjectBindingManager {
    async fn facade(&self) -> Result<Arc<dyn AnalysisFacade>> {
        let project = self.settings.project_settings()?;
        create_facade(&project, &self.global).inspect_err(|e| {
            if e.is_invalid_binding() {
                warn!("{e}; check the project binding");
            }
        })
    }
}
