//! Directory Operations
//!
//! Thin layer over `std::fs` with a per-operation error policy:
//! - `create_directory` / `remove_directory_recursive`: best-effort, failures
//!   go to the diagnostic sink and are never returned
//! - `list_entries`, `read_file`, `write_file`, `delete_file`: the underlying
//!   `io::Error` is returned unchanged

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::diagnostics::{Diagnostic, DiagnosticSink};

/// How `write_file` treats an existing target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with `AlreadyExists` if the file is present (atomic create-if-absent)
    CreateNew,

    /// Truncate an existing file and write; fail with `NotFound` if it is absent
    Replace,
}

/// An immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name including extension (`"abc.json"`)
    pub name: String,

    /// File name without its final extension (`"abc"`)
    pub base_name: String,

    /// Absolute or root-relative path to the entry
    pub full_path: PathBuf,
}

/// Filesystem primitives used by the store
#[derive(Clone)]
pub struct DirectoryOps {
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for DirectoryOps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryOps").finish_non_exhaustive()
    }
}

impl DirectoryOps {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Forward a suppressed failure to the sink
    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    // =========================================================================
    // Best-effort operations
    // =========================================================================

    /// Create a single directory; never fails
    ///
    /// The parent must exist. "Already exists" and every other failure are
    /// reported to the sink only.
    pub fn create_directory(&self, path: &Path) {
        if let Err(e) = fs::create_dir(path) {
            self.report(Diagnostic::from_io("create_directory", path, &e));
        }
    }

    /// Create a directory and any missing parents; never fails
    pub fn create_directory_all(&self, path: &Path) {
        if let Err(e) = fs::create_dir_all(path) {
            self.report(Diagnostic::from_io("create_directory", path, &e));
        }
    }

    /// Remove a directory and everything under it; never fails
    ///
    /// Absent paths are a no-op. Symlinks are unlinked, not followed.
    pub fn remove_directory_recursive(&self, path: &Path) {
        if let Err(e) = self.try_remove_directory(path) {
            self.report(Diagnostic::from_io("remove_directory", path, &e));
        }
    }

    fn try_remove_directory(&self, path: &Path) -> io::Result<()> {
        for entry in self.list_entries(path)? {
            let metadata = fs::symlink_metadata(&entry.full_path)?;
            if metadata.is_dir() {
                self.try_remove_directory(&entry.full_path)?;
            } else {
                self.delete_file(&entry.full_path)?;
            }
        }

        fs::remove_dir(path)
    }

    // =========================================================================
    // Propagating operations
    // =========================================================================

    /// List immediate children in directory-listing order (not sorted)
    pub fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let full_path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            let base_name = full_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.clone());

            entries.push(DirEntry {
                name,
                base_name,
                full_path,
            });
        }

        Ok(entries)
    }

    pub fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Write `bytes` to `path` according to `mode`
    pub fn write_file(&self, path: &Path, bytes: &[u8], mode: WriteMode) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true);

        match mode {
            WriteMode::CreateNew => options.create_new(true),
            WriteMode::Replace => options.truncate(true),
        };

        let mut file = options.open(path)?;
        file.write_all(bytes)?;
        file.flush()
    }

    pub fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
