//! Infrastructure adapters for devkit.
//!
//! This crate implements the ports defined in `devkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clipboard;
pub mod filesystem;
pub mod opener;

// Re-export commonly used adapters
pub use clipboard::{MemoryClipboard, SystemClipboard};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use opener::{RecordingOpener, SystemOpener};
