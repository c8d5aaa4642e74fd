//! Diagnostic sinks
//!
//! Best-effort operations swallow their failures. Each swallowed failure is
//! handed to a [`DiagnosticSink`] so it stays observable without affecting
//! control flow.

use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// One suppressed failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Operation that failed (e.g. `"create_directory"`, `"get"`)
    pub op: &'static str,

    /// Path the operation was working on
    pub path: PathBuf,

    /// I/O error kind, when the failure came from the filesystem
    pub kind: Option<io::ErrorKind>,

    /// Human-readable description of the failure
    pub message: String,
}

impl Diagnostic {
    pub fn from_io(op: &'static str, path: &Path, err: &io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            kind: Some(err.kind()),
            message: err.to_string(),
        }
    }

    pub fn new(op: &'static str, path: &Path, message: impl Into<String>) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            kind: None,
            message: message.into(),
        }
    }

    /// Failures that are part of normal operation (idempotent create, absent target)
    pub fn is_expected(&self) -> bool {
        matches!(
            self.kind,
            Some(io::ErrorKind::AlreadyExists) | Some(io::ErrorKind::NotFound)
        )
    }
}

/// Receives failures that soft operations do not return
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: emits a `tracing` event per diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if diagnostic.is_expected() {
            tracing::debug!(
                op = diagnostic.op,
                path = %diagnostic.path.display(),
                error = %diagnostic.message,
                "suppressed filesystem error"
            );
        } else {
            tracing::warn!(
                op = diagnostic.op,
                path = %diagnostic.path.display(),
                error = %diagnostic.message,
                "suppressed filesystem error"
            );
        }
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Diagnostics reported by one operation
    pub fn for_op(&self, op: &str) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.op == op)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}
