//! Collection Store
//!
//! CRUD over one collection directory.
//!
//! ## Document States
//! ```text
//!            create              update
//!   absent ─────────▶ present ◀─────────┐
//!     ▲                  │  └───────────┘
//!     └──────────────────┘
//!            delete
//! ```
//!
//! ## Failure Policy
//! - `create` / `update`: `Conflict` / `NotFound` for the expected failure,
//!   any other I/O error unchanged
//! - `get` / `delete`: never fail; `None` / `false` plus a diagnostic
//! - `get_all`: fails only if the collection directory cannot be listed
//!
//! ## Concurrency
//! No locks. `create` relies on exclusive-create: of two racing creates for
//! one id, exactly one wins. `update` is read-then-write with no
//! compare-and-swap, so concurrent updates to one document can lose writes.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::Document;
use crate::error::{FileDbError, NameKind, Result};
use crate::fs::{Diagnostic, DirectoryOps, WriteMode};
use crate::name::validate_name;
use crate::path::PathResolver;

/// Store bound to a single collection
#[derive(Debug, Clone)]
pub struct Collection {
    /// Collection (directory) name
    name: String,

    /// Shared path computation for the owning database
    resolver: Arc<PathResolver>,

    /// Filesystem primitives and diagnostic sink
    ops: DirectoryOps,

    /// Key attached to composite documents on the way out
    identity_field: Arc<str>,

    /// Reader threads for `get_all`
    read_parallelism: usize,
}

impl Collection {
    /// Bind a store to `name`; performs no I/O
    pub fn new(
        name: &str,
        resolver: Arc<PathResolver>,
        ops: DirectoryOps,
        identity_field: Arc<str>,
        read_parallelism: usize,
    ) -> Result<Self> {
        validate_name(NameKind::Collection, name)?;

        Ok(Self {
            name: name.to_string(),
            resolver,
            ops,
            identity_field,
            read_parallelism: read_parallelism.max(1),
        })
    }

    /// Create a new document; fails with `Conflict` if `doc_id` exists
    ///
    /// The collection directory is created first, best-effort. Returns the
    /// stored payload with the identity field attached.
    pub fn create<T>(&self, doc_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        validate_name(NameKind::Document, doc_id)?;
        let document = Document::from_value(serde_json::to_value(data)?);
        let bytes = document.to_vec()?;

        self.ops.create_directory(&self.path());

        let path = self.resolver.document_path(&self.name, doc_id);
        match self.ops.write_file(&path, &bytes, WriteMode::CreateNew) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(FileDbError::Conflict {
                    doc_id: doc_id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(collection = %self.name, doc_id, "created document");

        Ok(document.with_identity(&self.identity_field, doc_id))
    }

    /// Fetch a document, or `None` if it is missing, unreadable, or not JSON
    pub fn get(&self, doc_id: &str) -> Option<Value> {
        self.load(doc_id)
            .map(|doc| doc.with_identity(&self.identity_field, doc_id))
    }

    /// Fetch a document and deserialize it into `T`
    ///
    /// The identity field is present in the value being deserialized, so `T`
    /// may declare it. Deserialization failure yields `None`.
    pub fn get_as<T: DeserializeOwned>(&self, doc_id: &str) -> Option<T> {
        let value = self.get(doc_id)?;

        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                let path = self.resolver.document_path(&self.name, doc_id);
                self.ops.report(Diagnostic::new("get_as", &path, e.to_string()));
                None
            }
        }
    }

    /// Fetch every document in the collection
    ///
    /// Entries are read concurrently and returned in directory-listing order;
    /// an entry that cannot be read as a document yields `None` at its index.
    /// Fails if the collection directory does not exist.
    pub fn get_all(&self) -> Result<Vec<Option<Value>>> {
        let entries = self.ops.list_entries(&self.path())?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.read_parallelism.min(entries.len());
        let next = AtomicUsize::new(0);
        let (next, listing) = (&next, &entries);

        let loaded = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(move |_| {
                    s.spawn(move |_| {
                        let mut batch = Vec::new();
                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            let Some(entry) = listing.get(index) else {
                                break;
                            };
                            batch.push((index, self.get(&entry.base_name)));
                        }
                        batch
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<std::thread::Result<Vec<_>>>()
        })
        .and_then(|joined| joined)
        .map_err(|_| {
            FileDbError::Io(io::Error::new(
                io::ErrorKind::Other,
                "document reader thread panicked",
            ))
        })?;

        let mut documents: Vec<Option<Value>> = vec![None; entries.len()];
        for (index, document) in loaded.into_iter().flatten() {
            documents[index] = document;
        }

        Ok(documents)
    }

    /// Shallow-merge `data` into an existing document
    ///
    /// Fails with `NotFound` when `get` would return `None`; no file is
    /// created in that case. Returns the merged document with identity.
    pub fn update<T>(&self, doc_id: &str, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        validate_name(NameKind::Document, doc_id)?;
        let patch = Document::from_value(serde_json::to_value(data)?);

        let existing = self.load(doc_id).ok_or_else(|| FileDbError::NotFound {
            doc_id: doc_id.to_string(),
        })?;

        let merged = existing.merge(patch);
        let bytes = merged.to_vec()?;

        // Replace never creates: a document deleted since `load` stays deleted
        let path = self.resolver.document_path(&self.name, doc_id);
        match self.ops.write_file(&path, &bytes, WriteMode::Replace) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FileDbError::NotFound {
                    doc_id: doc_id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tracing::debug!(collection = %self.name, doc_id, "updated document");

        Ok(merged.with_identity(&self.identity_field, doc_id))
    }

    /// Remove a document; `false` if it could not be deleted for any reason
    pub fn delete(&self, doc_id: &str) -> bool {
        let path = self.resolver.document_path(&self.name, doc_id);

        if let Err(e) = validate_name(NameKind::Document, doc_id) {
            self.ops.report(Diagnostic::new("delete", &path, e.to_string()));
            return false;
        }

        match self.ops.delete_file(&path) {
            Ok(()) => {
                tracing::debug!(collection = %self.name, doc_id, "deleted document");
                true
            }
            Err(e) => {
                self.ops.report(Diagnostic::from_io("delete", &path, &e));
                false
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory backing this collection (may not exist yet)
    pub fn path(&self) -> PathBuf {
        self.resolver.collection_path(&self.name)
    }

    /// Identity key attached to returned composites
    pub fn identity_field(&self) -> &str {
        &self.identity_field
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read and parse the stored value without identity; soft on every failure
    fn load(&self, doc_id: &str) -> Option<Document> {
        let path = self.resolver.document_path(&self.name, doc_id);

        if let Err(e) = validate_name(NameKind::Document, doc_id) {
            self.ops.report(Diagnostic::new("get", &path, e.to_string()));
            return None;
        }

        let bytes = match self.ops.read_file(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.ops.report(Diagnostic::from_io("get", &path, &e));
                return None;
            }
        };

        match Document::from_slice(&bytes) {
            Ok(doc) => Some(doc),
            Err(e) => {
                self.ops.report(Diagnostic::new("get", &path, e.to_string()));
                None
            }
        }
    }
}
