//! Application layer errors.
//!
//! These errors represent failures at the ports (filesystem, clipboard,
//! external processes), not invalid input. Input errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the outside world.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    ///
    /// Never returned as the primary error of an operation; it is logged and
    /// the original failure surfaces instead.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// The external "open in viewer" invocation could not be started.
    #[error("Failed to open {path}: {reason}")]
    OpenFailed { path: PathBuf, reason: String },

    /// The system clipboard rejected the text.
    #[error("Clipboard error: {reason}")]
    ClipboardFailed { reason: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state is unavailable")]
    StateLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OpenFailed { .. } => vec![
                "Ensure `open` (macOS), `xdg-open` (Linux) or `explorer` (Windows) is available"
                    .into(),
            ],
            Self::ClipboardFailed { .. } => vec![
                "Install pbcopy, xclip or xsel, or pass --no-copy".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Filesystem,
            Self::OpenFailed { .. } | Self::ClipboardFailed { .. } => ErrorCategory::External,
            Self::StateLockError => ErrorCategory::Internal,
        }
    }
}
