//! Error types for survivalsim_core.
//!
//! Simulation rules never fail; these cover the edges where the simulation
//! touches the outside world: configuration files and event logs.

use thiserror::Error;

/// Main error type for survivalsim_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<SimError>,
    },
}

/// Result type alias for survivalsim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new validation error.
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
