//! User and project settings
//!
//! Global settings live in the user's config directory, project settings in
//! `<project>/.lint-gate/config.toml`. Both are optional: a missing file
//! yields defaults.

use crate::error::Result;
use crate::types::Module;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding project settings
pub const CONFIG_DIR_NAME: &str = ".lint-gate";
/// Project settings file name
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Global settings file name, inside the user config directory
pub const GLOBAL_SETTINGS_FILE_NAME: &str = "settings.toml";

const DEFAULT_EXTENSIONS: &[&str] = &[
    "c", "cpp", "cs", "css", "go", "h", "hpp", "html", "java", "js", "jsx", "kt", "php", "py",
    "rb", "rs", "scala", "swift", "ts", "tsx", "xml",
];

const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", ".lint-gate", "build", "node_modules", "target"];

/// User-level settings shared by every project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Analyze files automatically when they are opened or changed
    #[serde(default = "default_true")]
    pub auto_trigger: bool,
    /// Known server connections
    #[serde(default)]
    pub connections: Vec<ServerConnection>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            auto_trigger: true,
            connections: Vec::new(),
        }
    }
}

impl GlobalSettings {
    /// Look up a connection by name
    pub fn connection(&self, name: &str) -> Option<&ServerConnection> {
        self.connections.iter().find(|c| c.name == name)
    }
}

/// A configured analysis server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConnection {
    /// Name referenced by project bindings
    pub name: String,
    /// Server URL
    pub url: String,
}

/// Project-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Project root, filled in by the loader
    #[serde(skip)]
    pub root: PathBuf,
    /// Local and project exclusion rules
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Modules of the project
    #[serde(default)]
    pub modules: Vec<ModuleSettings>,
    /// Binding to a server project, absent in standalone mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingSettings>,
}

/// Rules deciding which files are analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Analyzable file extensions, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names whose content is generated or belongs to tooling
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
    /// Whether test sources are analyzed on automatic triggers
    #[serde(default = "default_true")]
    pub analyze_tests: bool,
    /// Project exclusion globs, relative to the project root
    #[serde(default)]
    pub file_exclusions: Vec<String>,
    /// Globs classifying test sources, relative to the project root
    #[serde(default)]
    pub test_patterns: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignored_dirs: default_ignored_dirs(),
            analyze_tests: true,
            file_exclusions: Vec::new(),
            test_patterns: Vec::new(),
        }
    }
}

/// A module declared in the project settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSettings {
    /// Module name, unique within the project
    pub name: String,
    /// Module root, relative to the project root
    pub root: PathBuf,
    /// Test source directories, relative to the project root
    #[serde(default)]
    pub test_roots: Vec<PathBuf>,
    /// Module-level exclusion globs, relative to the project root
    #[serde(default)]
    pub exclusions: Vec<String>,
}

/// Link between the project and a server project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSettings {
    /// Name of a connection from the global settings
    pub connection: String,
    /// Key of the server project
    pub project_key: String,
    /// File exclusion settings synced from the server project
    #[serde(default)]
    pub server_settings: ServerSettings,
}

/// Server-side file exclusion settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Main files matching any of these are excluded
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// When non-empty, main files must match one of these
    #[serde(default)]
    pub inclusions: Vec<String>,
    /// Test files matching any of these are excluded
    #[serde(default)]
    pub test_exclusions: Vec<String>,
    /// When non-empty, test files must match one of these
    #[serde(default)]
    pub test_inclusions: Vec<String>,
}

impl ProjectSettings {
    /// Modules with their directories resolved against the project root
    pub fn resolved_modules(&self) -> Vec<Module> {
        self.modules
            .iter()
            .map(|m| Module {
                name: m.name.clone(),
                root: self.root.join(&m.root),
                test_roots: m.test_roots.iter().map(|r| self.root.join(r)).collect(),
            })
            .collect()
    }
}

/// Source of the current project settings
///
/// Settings may change between submissions, so implementations must not
/// cache them across calls.
pub trait SettingsProvider: Send + Sync {
    /// Current project settings
    fn project_settings(&self) -> Result<ProjectSettings>;
}

/// Settings read from the project's config file on every call
#[derive(Debug, Clone)]
pub struct ProjectConfigFile {
    root: PathBuf,
}

impl ProjectConfigFile {
    /// Settings provider for the project at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SettingsProvider for ProjectConfigFile {
    fn project_settings(&self) -> Result<ProjectSettings> {
        load_project_settings(&self.root)
    }
}

/// Directory holding the project settings
pub fn config_dir(project_root: impl AsRef<Path>) -> PathBuf {
    project_root.as_ref().join(CONFIG_DIR_NAME)
}

/// Path of the project settings file
pub fn config_path(project_root: impl AsRef<Path>) -> PathBuf {
    config_dir(project_root).join(CONFIG_FILE_NAME)
}

/// Load project settings, falling back to defaults when the file is missing
pub fn load_project_settings(project_root: impl AsRef<Path>) -> Result<ProjectSettings> {
    let project_root = project_root.as_ref();
    let path = config_path(project_root);

    let mut settings = if path.exists() {
        debug!(path = %path.display(), "loading project settings");
        let raw = fs::read_to_string(&path)?;
        toml::from_str::<ProjectSettings>(&raw)?
    } else {
        ProjectSettings::default()
    };

    settings.root = project_root.to_path_buf();
    Ok(normalize_project(settings))
}

/// Default location of the global settings file
pub fn default_global_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lint-gate").join(GLOBAL_SETTINGS_FILE_NAME))
}

/// Load global settings from `path`, falling back to defaults when missing
pub fn load_global_settings(path: Option<&Path>) -> Result<GlobalSettings> {
    let Some(path) = path else {
        return Ok(GlobalSettings::default());
    };
    if !path.exists() {
        return Ok(GlobalSettings::default());
    }

    debug!(path = %path.display(), "loading global settings");
    let raw = fs::read_to_string(path)?;
    let mut settings: GlobalSettings = toml::from_str(&raw)?;
    for connection in &mut settings.connections {
        connection.name = connection.name.trim().to_owned();
        connection.url = connection.url.trim().to_owned();
    }
    Ok(settings)
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_ignored_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|s| (*s).to_owned()).collect()
}

fn normalize_patterns(patterns: Vec<String>) -> Vec<String> {
    patterns
        .into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

fn normalize_project(mut settings: ProjectSettings) -> ProjectSettings {
    let analysis = &mut settings.analysis;
    analysis.extensions = normalize_patterns(std::mem::take(&mut analysis.extensions))
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect();
    analysis.ignored_dirs = normalize_patterns(std::mem::take(&mut analysis.ignored_dirs));
    analysis.file_exclusions = normalize_patterns(std::mem::take(&mut analysis.file_exclusions));
    analysis.test_patterns = normalize_patterns(std::mem::take(&mut analysis.test_patterns));

    for module in &mut settings.modules {
        module.name = module.name.trim().to_owned();
        module.exclusions = normalize_patterns(std::mem::take(&mut module.exclusions));
    }

    if let Some(binding) = settings.binding.as_mut() {
        binding.connection = binding.connection.trim().to_owned();
        binding.project_key = binding.project_key.trim().to_owned();
        let server = &mut binding.server_settings;
        server.exclusions = normalize_patterns(std::mem::take(&mut server.exclusions));
        server.inclusions = normalize_patterns(std::mem::take(&mut server.inclusions));
        server.test_exclusions = normalize_patterns(std::mem::take(&mut server.test_exclusions));
        server.test_inclusions = normalize_patterns(std::mem::take(&mut server.test_inclusions));
    }

    settings
}
