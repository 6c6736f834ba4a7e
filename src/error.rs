//! Error types for the tflock-patch CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to one exit code.

use crate::exit_codes;
use crate::lock_table::{RemoteFailure, RemoteFailureKind};
use thiserror::Error;

/// Main error type for patch operations.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The configuration file could not be read or holds invalid values.
    #[error("{0}")]
    ConfigError(String),

    /// The update call against the lock table failed.
    ///
    /// All remote failures share this variant; `kind` only refines logging
    /// and the audit trail.
    #[error("{message}")]
    RemoteOperationFailed {
        kind: RemoteFailureKind,
        message: String,
    },
}

impl PatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PatchError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PatchError::RemoteOperationFailed { .. } => exit_codes::REMOTE_FAILURE,
        }
    }
}

impl From<RemoteFailure> for PatchError {
    fn from(failure: RemoteFailure) -> Self {
        PatchError::RemoteOperationFailed {
            kind: failure.kind,
            message: failure.message,
        }
    }
}

/// Result type alias for patch operations.
pub type Result<T> = std::result::Result<T, PatchError>;
