//! Unified error handling for devkit core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for devkit core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DevkitError {
    /// Invalid input (password length, playground name, ...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures at the ports (filesystem, clipboard, external processes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl DevkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    External,
    Internal,
}

/// Convenient result type alias.
pub type DevkitResult<T> = Result<T, DevkitError>;
