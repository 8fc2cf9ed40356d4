//! Error taxonomy for the scaffolding workflow
//!
//! `Validation` and `Io` abort the run. External-command failures are not
//! errors at all: they are carried as [`crate::runtime::StepOutcome`] values
//! so the workflow can keep going and report partial success.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A required answer was empty after prompting.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Missing template source or unwritable destination.
    #[error("{message}: {}", .path.display())]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file scheduled for merging could not be parsed.
    #[error("invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScaffoldError {
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
