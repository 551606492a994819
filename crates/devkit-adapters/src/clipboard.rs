//! Clipboard adapters.
//!
//! The system adapter pipes text into the platform's clipboard utility
//! rather than linking a windowing toolkit.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};

use devkit_core::{
    application::{ApplicationError, ports::Clipboard},
    error::DevkitResult,
};
use thiserror::Error;
use tracing::debug;

/// One clipboard utility and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Backend {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const BACKENDS: &[Backend] = &[Backend {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const BACKENDS: &[Backend] = &[Backend {
    program: "cmd",
    args: &["/C", "clip"],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const BACKENDS: &[Backend] = &[
    Backend {
        program: "wl-copy",
        args: &[],
    },
    Backend {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    Backend {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[derive(Debug, Error)]
enum BackendError {
    #[error("no clipboard utility found (tried {tried})")]
    NotInstalled { tried: String },

    #[error("{program} failed: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit {
        program: &'static str,
        status: ExitStatus,
    },
}

/// Copies text through the first available platform clipboard utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn copy_with(backend: &Backend, text: &str) -> Result<(), BackendError> {
        let io_err = |source| BackendError::Io {
            program: backend.program,
            source,
        };

        let mut child = Command::new(backend.program)
            .args(backend.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(io_err)?;
        }

        let status = child.wait().map_err(io_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(BackendError::Exit {
                program: backend.program,
                status,
            })
        }
    }

    fn copy_any(text: &str) -> Result<&'static str, BackendError> {
        for backend in BACKENDS {
            match Self::copy_with(backend, text) {
                Ok(()) => return Ok(backend.program),
                Err(BackendError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    debug!(program = backend.program, "Clipboard utility not installed");
                }
                Err(e) => return Err(e),
            }
        }
        Err(BackendError::NotInstalled {
            tried: BACKENDS
                .iter()
                .map(|b| b.program)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> DevkitResult<()> {
        let program = Self::copy_any(text).map_err(|e| ApplicationError::ClipboardFailed {
            reason: e.to_string(),
        })?;
        debug!(program, "Copied to clipboard");
        Ok(())
    }
}

/// Clipboard that keeps copied text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> DevkitResult<()> {
        *self
            .contents
            .lock()
            .map_err(|_| ApplicationError::StateLockError)? = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_copy() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }

    #[test]
    fn missing_backend_is_reported_as_not_installed() {
        let backend = Backend {
            program: "devkit-definitely-not-a-clipboard-tool",
            args: &[],
        };
        let err = SystemClipboard::copy_with(&backend, "x").unwrap_err();
        assert!(matches!(
            err,
            BackendError::Io { ref source, .. } if source.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn every_platform_has_a_backend() {
        assert!(!BACKENDS.is_empty());
    }
}
