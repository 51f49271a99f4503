//! File-system access handed to generators.
//!
//! Reads are always blocking. Writes are either applied immediately or, with
//! [`DeferredFileSystemAccess`], queued and applied on
//! [`flush`](FileSystemAccess::flush) once the generate phase is over.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use parking_lot::Mutex;

use super::GeneratorError;

/// Output file access shared by all generate-phase workers.
pub trait FileSystemAccess: Send + Sync {
    /// Read a file (blocking).
    fn read_text(&self, path: &str) -> Result<String, GeneratorError>;

    /// Create or overwrite a file.
    fn write_text(&self, path: &str, contents: &str) -> Result<(), GeneratorError>;

    fn is_file(&self, path: &str) -> bool;

    /// Delete a file. Returns `false` if there was nothing to delete.
    fn delete(&self, path: &str) -> Result<bool, GeneratorError>;

    /// Apply pending writes.
    fn flush(&self) -> Result<(), GeneratorError> {
        Ok(())
    }
}

/// Check that `path` is relative and never leaves the output root.
pub fn validate_path(path: &str) -> Result<&Path, GeneratorError> {
    let candidate = Path::new(path);
    let valid = !path.is_empty()
        && candidate
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if valid {
        Ok(candidate)
    } else {
        Err(GeneratorError::InvalidPath(path.to_string()))
    }
}

// ============================================================================
// IN MEMORY
// ============================================================================

/// Keeps generated files in memory, in write order.
#[derive(Debug, Default)]
pub struct InMemoryFileSystemAccess {
    files: Mutex<IndexMap<String, String>>,
}

impl InMemoryFileSystemAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of one file, if written.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().get(path).cloned()
    }

    /// Copy of every file written so far.
    pub fn files(&self) -> IndexMap<String, String> {
        self.files.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }
}

impl FileSystemAccess for InMemoryFileSystemAccess {
    fn read_text(&self, path: &str) -> Result<String, GeneratorError> {
        self.get(path)
            .ok_or_else(|| GeneratorError::NotFound(path.to_string()))
    }

    fn write_text(&self, path: &str, contents: &str) -> Result<(), GeneratorError> {
        validate_path(path)?;
        self.files
            .lock()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.lock().contains_key(path)
    }

    fn delete(&self, path: &str) -> Result<bool, GeneratorError> {
        Ok(self.files.lock().shift_remove(path).is_some())
    }
}

// ============================================================================
// ON DISK
// ============================================================================

/// Writes generated files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryFileSystemAccess {
    root: PathBuf,
}

impl DirectoryFileSystemAccess {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, GeneratorError> {
        Ok(self.root.join(validate_path(path)?))
    }
}

impl FileSystemAccess for DirectoryFileSystemAccess {
    fn read_text(&self, path: &str) -> Result<String, GeneratorError> {
        let full = self.resolve(path)?;
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GeneratorError::NotFound(path.to_string()),
            _ => GeneratorError::io(full, e),
        })
    }

    fn write_text(&self, path: &str, contents: &str) -> Result<(), GeneratorError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::io(parent, e))?;
        }
        fs::write(&full, contents).map_err(|e| GeneratorError::io(full, e))
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|full| full.is_file())
    }

    fn delete(&self, path: &str) -> Result<bool, GeneratorError> {
        let full = self.resolve(path)?;
        match fs::remove_file(&full) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(GeneratorError::io(full, e)),
        }
    }
}

// ============================================================================
// DEFERRED WRITES
// ============================================================================

/// Queues writes instead of blocking on them.
///
/// Reads see queued writes first. Deletes go straight to the inner access and
/// drop any queued write for the same path.
#[derive(Debug)]
pub struct DeferredFileSystemAccess<F: FileSystemAccess> {
    inner: F,
    pending: Mutex<IndexMap<String, String>>,
}

impl<F: FileSystemAccess> DeferredFileSystemAccess<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            pending: Mutex::new(IndexMap::new()),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Number of writes waiting for [`flush`](FileSystemAccess::flush).
    pub fn pending_writes(&self) -> usize {
        self.pending.lock().len()
    }
}

impl<F: FileSystemAccess> FileSystemAccess for DeferredFileSystemAccess<F> {
    fn read_text(&self, path: &str) -> Result<String, GeneratorError> {
        if let Some(contents) = self.pending.lock().get(path) {
            return Ok(contents.clone());
        }
        self.inner.read_text(path)
    }

    fn write_text(&self, path: &str, contents: &str) -> Result<(), GeneratorError> {
        validate_path(path)?;
        self.pending
            .lock()
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }

    fn is_file(&self, path: &str) -> bool {
        self.pending.lock().contains_key(path) || self.inner.is_file(path)
    }

    fn delete(&self, path: &str) -> Result<bool, GeneratorError> {
        let queued = self.pending.lock().shift_remove(path).is_some();
        let deleted = self.inner.delete(path)?;
        Ok(queued || deleted)
    }

    /// Apply queued writes in order. Stops at the first failing write; the
    /// remaining writes stay queued.
    fn flush(&self) -> Result<(), GeneratorError> {
        let mut pending = self.pending.lock();
        tracing::debug!("[GENERATOR] flushing {} deferred write(s)", pending.len());
        while let Some((path, contents)) = pending.shift_remove_index(0) {
            if let Err(e) = self.inner.write_text(&path, &contents) {
                pending.shift_insert(0, path, contents);
                return Err(e);
            }
        }
        self.inner.flush()
    }
}
