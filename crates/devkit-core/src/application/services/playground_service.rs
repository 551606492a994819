//! Playground Service - creates Swift playground directories.
//!
//! Workflow per call:
//! 1. Resolve `<location>/<name>.playground` (expanding `~`)
//! 2. Return early if it already exists (no writes)
//! 3. Create the directory
//! 4. Write every template file in parallel
//! 5. On any failure, remove the directory and surface the original error
//!
//! The rollback is best effort: a failed cleanup is logged and swallowed.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Opener},
    },
    domain::{CreationParameters, TemplateFile},
    error::DevkitResult,
};

/// Outcome of [`PlaygroundService::create`].
#[derive(Clone)]
pub struct Playground {
    pub name: String,
    /// Absolute path of the `.playground` directory.
    pub path: PathBuf,
    /// `true` when the directory was already there and left untouched.
    pub already_exists: bool,
    opener: Arc<dyn Opener>,
}

impl Playground {
    /// Open the playground in the platform's default viewer.
    pub fn open(&self) -> DevkitResult<()> {
        info!(path = %self.path.display(), "Opening playground");
        self.opener.open(&self.path)
    }
}

impl fmt::Debug for Playground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playground")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("already_exists", &self.already_exists)
            .finish_non_exhaustive()
    }
}

/// Playground scaffolding service.
pub struct PlaygroundService {
    filesystem: Box<dyn Filesystem>,
    opener: Arc<dyn Opener>,
    home: Option<PathBuf>,
}

impl PlaygroundService {
    /// Create a service that expands `~` to the current user's home.
    pub fn new(filesystem: Box<dyn Filesystem>, opener: Arc<dyn Opener>) -> Self {
        Self {
            filesystem,
            opener,
            home: dirs::home_dir(),
        }
    }

    /// Override the directory `~` expands to.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Create a playground, or report the existing one.
    #[instrument(
        skip_all,
        fields(
            name = %params.name,
            template = %params.template,
            platform = %params.platform
        )
    )]
    pub fn create(&self, params: &CreationParameters) -> DevkitResult<Playground> {
        let path = self.resolve_path(params)?;

        if self.filesystem.exists(&path) {
            info!(path = %path.display(), "Playground already exists");
            return Ok(self.playground(params, path, true));
        }

        // Nothing to roll back if this fails.
        self.filesystem.create_dir(&path)?;
        debug!(path = %path.display(), "Playground directory created");

        let files = params.template_files();
        match self.populate(&path, &files) {
            Ok(()) => {
                info!(path = %path.display(), files = files.len(), "Playground created");
                Ok(self.playground(params, path, false))
            }
            Err(e) => {
                warn!(error = %e, "Populating playground failed, attempting rollback");
                self.rollback(&path);
                Err(e)
            }
        }
    }

    /// Absolute path [`Self::create`] would use for `params`.
    ///
    /// `~` expands against the service's home directory and relative
    /// locations are anchored at the current directory.
    pub fn resolve_path(&self, params: &CreationParameters) -> DevkitResult<PathBuf> {
        let path = params.playground_path(self.home.as_deref());
        if path.is_absolute() {
            return Ok(path);
        }
        std::path::absolute(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to resolve absolute path: {e}"),
            }
            .into()
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn playground(
        &self,
        params: &CreationParameters,
        path: PathBuf,
        already_exists: bool,
    ) -> Playground {
        Playground {
            name: params.name.to_string(),
            path,
            already_exists,
            opener: Arc::clone(&self.opener),
        }
    }

    /// Write every file in parallel and wait for all of them.
    ///
    /// The first failure in declaration order is returned.
    fn populate(&self, root: &Path, files: &[TemplateFile]) -> DevkitResult<()> {
        let filesystem = self.filesystem.as_ref();
        let results: Vec<DevkitResult<()>> = files
            .par_iter()
            .map(|file| write_template_file(filesystem, root, file))
            .collect();

        results.into_iter().collect()
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => info!(path = %root.display(), "Rollback successful"),
            Err(e) => {
                let failure = ApplicationError::RollbackFailed {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                };
                warn!(error = %failure, "Rollback failed");
            }
        }
    }
}

fn write_template_file(
    filesystem: &dyn Filesystem,
    root: &Path,
    file: &TemplateFile,
) -> DevkitResult<()> {
    let dir = match file.subdirectory {
        Some(sub) => {
            let dir = root.join(sub);
            filesystem.create_dir_all(&dir)?;
            dir
        }
        None => root.to_path_buf(),
    };
    let path = dir.join(file.file_name());
    debug!(path = %path.display(), "Writing template file");
    filesystem.write_file(&path, &file.contents)
}
