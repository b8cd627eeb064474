//! Error handling for skillgap.
//!
//! The reconciliation core itself never fails; every input degrades to a
//! default. Errors here belong to the shell around it: file IO, JSON
//! parsing, configuration, and argument validation.

use std::io;

use thiserror::Error;

/// Main error type for skillgap operations.
#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SkillGapError {
    /// Exit code for the process when this error terminates a command.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillGapError>;
