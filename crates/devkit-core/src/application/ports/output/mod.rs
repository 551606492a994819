//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `devkit-adapters` crate provides implementations.

use std::path::Path;

use crate::error::DevkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `devkit_adapters::filesystem::LocalFilesystem` (production)
/// - `devkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Implementations must be safe to call from several threads at once:
/// playground files are written in parallel.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory. Fails if it exists or its parent is missing.
    fn create_dir(&self, path: &Path) -> DevkitResult<()>;

    /// Create a directory and all parent directories.
    ///
    /// Succeeds if the directory already exists, including when another
    /// thread created it concurrently.
    fn create_dir_all(&self, path: &Path) -> DevkitResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> DevkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DevkitResult<()>;
}

/// Port for the external "open in viewer" invocation.
///
/// Fire-and-forget: implementations start the viewer and return without
/// waiting for it.
#[cfg_attr(test, mockall::automock)]
pub trait Opener: Send + Sync {
    fn open(&self, path: &Path) -> DevkitResult<()>;
}

/// Port for the system clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn copy(&self, text: &str) -> DevkitResult<()>;
}
