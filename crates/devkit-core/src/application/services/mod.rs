//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a password" or "create a playground".

pub mod password_service;
pub mod playground_service;

pub use password_service::PasswordService;
pub use playground_service::{Playground, PlaygroundService};
