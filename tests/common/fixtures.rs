//! Project fixtures and a fully mocked submitter

#![allow(dead_code)]

use super::mocks::{MockBindings, MockFacade, MutableSettings, RecordingConsole, RecordingJobs};
use lint_gate::config::{ModuleSettings, ProjectSettings};
use lint_gate::submit::{Submitter, SubmitterServices};
use lint_gate::types::{Module, SourceFile};
use lint_gate::workspace::{ProjectLayout, StaticEditorSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const ROOT: &str = "/work/shop";

/// File under the fixture project
pub fn file(relative: &str) -> SourceFile {
    SourceFile::new(Path::new(ROOT).join(relative))
}

/// Module `name` rooted at `<ROOT>/<name>`, with tests under `<name>/tests`
pub fn module(name: &str) -> Module {
    Module::new(name, Path::new(ROOT).join(name))
        .with_test_root(Path::new(ROOT).join(name).join("tests"))
}

/// Project with modules `api` and `web`
pub fn project_settings() -> ProjectSettings {
    let module_settings = |name: &str| ModuleSettings {
        name: name.to_string(),
        root: PathBuf::from(name),
        test_roots: vec![PathBuf::from(name).join("tests")],
        exclusions: Vec::new(),
    };

    ProjectSettings {
        root: PathBuf::from(ROOT),
        modules: vec![module_settings("api"), module_settings("web")],
        ..ProjectSettings::default()
    }
}

/// Submitter wired to recording doubles
pub struct Harness {
    pub submitter: Submitter,
    pub settings: Arc<MutableSettings>,
    pub facade: Arc<MockFacade>,
    pub bindings: Arc<MockBindings>,
    pub jobs: Arc<RecordingJobs>,
    pub console: Arc<RecordingConsole>,
}

impl Harness {
    /// Standard project, server excluding nothing
    pub fn new() -> Self {
        Self::with_facade(MockFacade::default())
    }

    /// Standard project with the given facade
    pub fn with_facade(facade: MockFacade) -> Self {
        let facade = Arc::new(facade);
        let bindings = Arc::new(MockBindings::new(Arc::clone(&facade)));
        Self::build(project_settings(), facade, bindings, Vec::new())
    }

    /// Standard project whose binding is invalid
    pub fn with_invalid_binding() -> Self {
        let bindings = Arc::new(MockBindings::invalid());
        Self::build(
            project_settings(),
            Arc::new(MockFacade::default()),
            bindings,
            Vec::new(),
        )
    }

    /// Standard project with the given files open in the editor
    pub fn with_open_files(open_files: Vec<SourceFile>) -> Self {
        let facade = Arc::new(MockFacade::default());
        let bindings = Arc::new(MockBindings::new(Arc::clone(&facade)));
        Self::build(project_settings(), facade, bindings, open_files)
    }

    fn build(
        settings: ProjectSettings,
        facade: Arc<MockFacade>,
        bindings: Arc<MockBindings>,
        open_files: Vec<SourceFile>,
    ) -> Self {
        let layout = ProjectLayout::from_settings(&settings);
        let settings = Arc::new(MutableSettings::new(settings));
        let jobs = Arc::new(RecordingJobs::default());
        let console = Arc::new(RecordingConsole::default());

        let submitter = Submitter::new(SubmitterServices {
            settings: settings.clone(),
            editor: Arc::new(StaticEditorSource::new(open_files)),
            modules: Arc::new(layout),
            bindings: bindings.clone(),
            jobs: jobs.clone(),
            console: console.clone(),
        });

        Self {
            submitter,
            settings,
            facade,
            bindings,
            jobs,
            console,
        }
    }
}
