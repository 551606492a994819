//! Domain value objects: PasswordLength, PlaygroundName, PlaygroundTemplate,
//! PlaygroundPlatform.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one is valid by construction: the only way to obtain one is through a
//! validating constructor or a `FromStr` parser.
//!
//! Templates and platforms deserialize through `FromStr`, so config files,
//! environment variables and CLI flags accept the same spellings.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

// ── PasswordLength ───────────────────────────────────────────────────────────

/// Number of characters in a generated password.
///
/// Invariant: `MIN <= value <= MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const MIN: usize = 5;
    pub const MAX: usize = 64;

    /// Validate an integer length.
    pub fn new(length: i64) -> Result<Self, DomainError> {
        if length < Self::MIN as i64 {
            return Err(DomainError::PasswordTooShort { length });
        }
        if length > Self::MAX as i64 {
            return Err(DomainError::PasswordTooLong { length });
        }
        Ok(Self(length as usize))
    }

    /// Parse raw user input (e.g. the text of a form field).
    ///
    /// Surrounding whitespace is ignored; anything else that is not a
    /// base-10 integer is rejected. Integers beyond `i64` are still reported
    /// as out of range.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => DomainError::PasswordTooLong { length: i64::MAX },
            IntErrorKind::NegOverflow => DomainError::PasswordTooShort { length: i64::MIN },
            _ => DomainError::PasswordLengthNotNumeric {
                input: trimmed.to_string(),
            },
        })?;
        Self::new(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PasswordLength {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── PlaygroundName ───────────────────────────────────────────────────────────

/// Name of a playground, used verbatim as the directory stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaygroundName(String);

impl PlaygroundName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: &str| DomainError::InvalidPlaygroundName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name.trim() != name {
            return Err(reject("name cannot start or end with whitespace"));
        }
        if name.starts_with('.') {
            return Err(reject("name cannot start with '.'"));
        }
        if name.contains(['/', '\\']) {
            return Err(reject("name cannot contain path separators"));
        }
        if name.contains('\0') {
            return Err(reject("name cannot contain NUL bytes"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaygroundName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlaygroundName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── PlaygroundTemplate ───────────────────────────────────────────────────────

/// Which `Contents.swift` body a new playground starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PlaygroundTemplate {
    /// Import-only stub.
    #[default]
    Empty,
    /// Live view hosting a SwiftUI `ContentView`.
    SwiftUi,
}

impl PlaygroundTemplate {
    pub const ALL: [Self; 2] = [Self::Empty, Self::SwiftUi];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SwiftUi => "swiftui",
        }
    }
}

impl fmt::Display for PlaygroundTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaygroundTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "swiftui" | "swift-ui" | "interactive-ui" => Ok(Self::SwiftUi),
            other => Err(DomainError::UnknownTemplate(other.to_string())),
        }
    }
}

impl TryFrom<String> for PlaygroundTemplate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── PlaygroundPlatform ───────────────────────────────────────────────────────

/// Target platform written into `contents.xcplayground`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PlaygroundPlatform {
    #[default]
    Ios,
    MacOs,
    TvOs,
}

impl PlaygroundPlatform {
    pub const ALL: [Self; 3] = [Self::Ios, Self::MacOs, Self::TvOs];

    /// Apple's spelling of the platform.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::MacOs => "macOS",
            Self::TvOs => "tvOS",
        }
    }

    /// Value of the `target-platform` attribute.
    pub fn target_platform(&self) -> String {
        self.display_name().to_lowercase()
    }
}

impl fmt::Display for PlaygroundPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlaygroundPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "macos" | "osx" => Ok(Self::MacOs),
            "tvos" => Ok(Self::TvOs),
            other => Err(DomainError::UnknownPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for PlaygroundPlatform {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
