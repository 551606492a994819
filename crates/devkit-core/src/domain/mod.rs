// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for devkit.
//!
//! This module contains pure logic: character pools, password generation,
//! playground layout and template bodies. All filesystem, clipboard and
//! process concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    password::{CharacterPool, PasswordOptions, SPECIAL_CHARS},
    playground::{CreationParameters, PLAYGROUND_EXTENSION, TemplateFile, WORKSPACE_DIRECTORY},
    render::RenderContext,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PasswordLength, PlaygroundName, PlaygroundPlatform, PlaygroundTemplate};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_parses_raw_length() {
        assert_eq!(
            DomainValidator::validate_password_length("16").unwrap(),
            PasswordLength::new(16).unwrap()
        );
        assert!(DomainValidator::validate_password_length("4").is_err());
        assert!(DomainValidator::validate_password_length("65").is_err());
        assert!(DomainValidator::validate_password_length("abc").is_err());
    }

    #[test]
    fn validator_rejects_bad_names() {
        assert!(DomainValidator::validate_playground_name("Demo").is_ok());
        assert!(matches!(
            DomainValidator::validate_playground_name("a/b"),
            Err(DomainError::InvalidPlaygroundName { .. })
        ));
    }

    // ========================================================================
    // End-to-end domain flow
    // ========================================================================

    #[test]
    fn validated_inputs_generate_password_of_requested_length() {
        let length = DomainValidator::validate_password_length("10").unwrap();
        let password = PasswordOptions::new(length, true, true).generate();
        let pool = CharacterPool::new(true, true);
        assert_eq!(password.chars().count(), 10);
        assert!(password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn ios_empty_playground_layout() {
        let params = CreationParameters::new(
            DomainValidator::validate_playground_name("Demo").unwrap(),
            "~/Playgrounds",
            PlaygroundTemplate::Empty,
            PlaygroundPlatform::Ios,
        );
        let files = params.template_files();
        assert_eq!(files.len(), 4);
        assert!(
            files
                .iter()
                .any(|f| f.contents.contains("target-platform='ios'"))
        );
        assert!(
            files
                .iter()
                .any(|f| f.subdirectory == Some(WORKSPACE_DIRECTORY))
        );
    }
}
