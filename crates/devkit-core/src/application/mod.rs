//! Application layer for devkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PasswordService, PlaygroundService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the ports; the
//! rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PasswordService, Playground, PlaygroundService};

// Re-export port traits (for adapter implementation)
pub use ports::{Clipboard, Filesystem, Opener};

pub use error::ApplicationError;
