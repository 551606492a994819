//! In-memory filesystem adapter for testing.
//!
//! Besides plain storage it can inject failures, which is how rollback
//! behaviour is exercised without touching the disk.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use devkit_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DevkitResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service under test.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
    fail_removals: bool,
    mutations: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.write_lock().failing_writes.insert(path.into());
    }

    /// Make `remove_dir_all` fail.
    pub fn fail_removals(&self) {
        self.write_lock().fail_removals = true;
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read_lock().files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.read_lock().files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of successful create/write/remove calls so far.
    pub fn mutation_count(&self) -> usize {
        self.read_lock().mutations
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_for_mutation(&self) -> DevkitResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StateLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn failure(path: &Path, reason: &str) -> ApplicationError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> DevkitResult<()> {
        let mut inner = self.lock_for_mutation()?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(failure(path, "Already exists").into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(path, "Parent directory does not exist").into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        inner.mutations += 1;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> DevkitResult<()> {
        let mut inner = self.lock_for_mutation()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        inner.mutations += 1;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> DevkitResult<()> {
        let mut inner = self.lock_for_mutation()?;

        if inner.failing_writes.contains(path) {
            return Err(failure(path, "Injected write failure").into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(failure(path, "Parent directory does not exist").into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.mutations += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_lock();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> DevkitResult<()> {
        let mut inner = self.lock_for_mutation()?;

        if inner.fail_removals {
            return Err(failure(path, "Injected removal failure").into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.mutations += 1;

        Ok(())
    }
}
