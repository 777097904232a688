//! What caused a submission and how it should be dispatched

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Cause of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerType {
    /// A file was opened in the editor
    EditorOpen,
    /// A file was edited
    EditorChange,
    /// The user explicitly asked for an analysis
    Action,
    /// The project binding changed
    BindingChange,
    /// Analysis settings changed
    ConfigChange,
    /// Automatic trigger coming from outside the editor
    ExternalAuto,
}

impl TriggerType {
    /// Every trigger, in declaration order
    pub const ALL: [Self; 6] = [
        Self::EditorOpen,
        Self::EditorChange,
        Self::Action,
        Self::BindingChange,
        Self::ConfigChange,
        Self::ExternalAuto,
    ];

    /// Whether project and server exclusions apply to this trigger.
    ///
    /// Explicit user actions bypass them: the user asked for these files.
    pub const fn requires_exclusion_check(self) -> bool {
        !matches!(self, Self::Action)
    }

    /// Stable identifier used on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EditorOpen => "editor-open",
            Self::EditorChange => "editor-change",
            Self::Action => "action",
            Self::BindingChange => "binding-change",
            Self::ConfigChange => "config-change",
            Self::ExternalAuto => "external-auto",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EditorOpen => write!(f, "Editor open"),
            Self::EditorChange => write!(f, "Editor change"),
            Self::Action => write!(f, "Action"),
            Self::BindingChange => write!(f, "Binding update"),
            Self::ConfigChange => write!(f, "Config change"),
            Self::ExternalAuto => write!(f, "External auto"),
        }
    }
}

impl FromStr for TriggerType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|trigger| trigger.as_str() == value)
            .ok_or_else(|| {
                format!(
                    "invalid trigger '{value}', expected one of: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                )
            })
    }
}

/// How a batch is handed to the job manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Runs in background, does not hold the single execution slot
    Background,
    /// Runs in foreground and consumes the execution slot
    Foreground,
    /// Foreground, blocking and consuming the execution slot
    Modal,
}

impl DispatchMode {
    /// Dispatch mode for a non-modal call site
    pub const fn from_background_flag(background: bool) -> Self {
        if background {
            Self::Background
        } else {
            Self::Foreground
        }
    }
}
