//! Password Service - validation + generation.
//!
//! The service turns raw host input into a password. Copying the result to
//! the clipboard and notifying the user are the caller's job.

use tracing::{debug, instrument};

use crate::{
    domain::{DomainValidator as validator, PasswordOptions},
    error::DevkitResult,
};

/// Stateless password generation service.
///
/// Safe to share between threads; every call draws from the calling
/// thread's own RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the raw length text, then generate.
    ///
    /// Fails only with a validation error; nothing is generated in that case.
    #[instrument(skip(self))]
    pub fn generate_from_input(
        &self,
        raw_length: &str,
        use_numbers: bool,
        use_special_chars: bool,
    ) -> DevkitResult<String> {
        let length = validator::validate_password_length(raw_length)?;
        Ok(self.generate(PasswordOptions::new(length, use_numbers, use_special_chars)))
    }

    /// Generate from already validated options. Total.
    pub fn generate(&self, options: PasswordOptions) -> String {
        debug!(
            length = options.length.get(),
            pool = options.pool().len(),
            "Generating password"
        );
        options.generate()
    }
}
