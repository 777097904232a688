//! Error types for lint-gate

use thiserror::Error;

/// Errors that can occur while preparing or submitting an analysis
#[derive(Error, Debug)]
pub enum Error {
    /// The project has no usable server/project binding
    #[error("invalid binding: {0}")]
    InvalidBinding(String),

    /// Settings could not be interpreted
    #[error("configuration error: {0}")]
    Config(String),

    /// The execution facade failed while answering a query
    #[error("analysis facade error: {0}")]
    Facade(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML
    #[error("failed to parse settings TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error means the binding is missing or broken.
    ///
    /// The binding layer notifies the user about this condition itself, so
    /// submitters abort silently instead of reporting it again.
    pub const fn is_invalid_binding(&self) -> bool {
        matches!(self, Self::InvalidBinding(_))
    }
}

/// Result type alias for lint-gate operations
pub type Result<T> = std::result::Result<T, Error>;
