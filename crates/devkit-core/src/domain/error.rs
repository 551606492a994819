// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::PasswordLength;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass through layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Password validation
    // ========================================================================
    #[error("Password length must be a number")]
    PasswordLengthNotNumeric { input: String },

    #[error("Password length must be greater than {}", PasswordLength::MIN - 1)]
    PasswordTooShort { length: i64 },

    #[error("Password length must be less than {}", PasswordLength::MAX + 1)]
    PasswordTooLong { length: i64 },

    // ========================================================================
    // Playground validation
    // ========================================================================
    #[error("Invalid playground name '{name}': {reason}")]
    InvalidPlaygroundName { name: String, reason: String },

    #[error("Unknown playground template '{0}'")]
    UnknownTemplate(String),

    #[error("Unknown playground platform '{0}'")]
    UnknownPlatform(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PasswordLengthNotNumeric { input } => vec![
                format!("'{}' is not a whole number", input),
                format!(
                    "Enter a number between {} and {}",
                    PasswordLength::MIN,
                    PasswordLength::MAX
                ),
            ],
            Self::PasswordTooShort { .. } | Self::PasswordTooLong { .. } => vec![format!(
                "Enter a number between {} and {}",
                PasswordLength::MIN,
                PasswordLength::MAX
            )],
            Self::InvalidPlaygroundName { .. } => vec![
                "Use a plain file name without path separators".into(),
                "Examples: Demo, MyPlayground, sorting-experiments".into(),
            ],
            Self::UnknownTemplate(_) => vec!["Available templates: empty, swiftui".into()],
            Self::UnknownPlatform(_) => vec!["Available platforms: ios, macos, tvos".into()],
        }
    }

    /// Error category for CLI display styling.
    ///
    /// Every domain error is a caller input problem; nothing here is internal.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
