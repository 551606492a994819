use crate::domain::{
    error::DomainError,
    value_objects::{PasswordLength, PlaygroundName},
};

/// Centralized domain validation.
///
/// Raw host input (form text, CLI arguments) is turned into domain values
/// here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_password_length(raw: &str) -> Result<PasswordLength, DomainError> {
        PasswordLength::parse(raw)
    }

    pub fn validate_playground_name(raw: &str) -> Result<PlaygroundName, DomainError> {
        PlaygroundName::new(raw)
    }
}
