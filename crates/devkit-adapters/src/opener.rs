//! "Open in default viewer" adapters.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use devkit_core::{
    application::{ApplicationError, ports::Opener},
    error::DevkitResult,
};
use tracing::debug;

/// Opens paths with the platform launcher: `open` on macOS, `xdg-open` on
/// Linux and the BSDs, `explorer` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(path: &Path) -> Command {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        let mut cmd = Command::new(program);
        cmd.arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> DevkitResult<()> {
        let mut cmd = Self::command(path);
        debug!(program = ?cmd.get_program(), path = %path.display(), "Spawning opener");

        // The child is intentionally not waited on.
        cmd.spawn().map(drop).map_err(|e| {
            ApplicationError::OpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Opener that only records what it was asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl Opener for RecordingOpener {
    fn open(&self, path: &Path) -> DevkitResult<()> {
        self.opened
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .push(path.to_path_buf());
        Ok(())
    }
}
