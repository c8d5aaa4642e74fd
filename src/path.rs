//! Path Resolution
//!
//! Pure mapping from (database root, collection, document id) to filesystem
//! paths. No I/O happens here and names are taken as given; validation lives
//! in [`crate::name`].

use std::path::{Path, PathBuf};

use crate::config::Config;

/// File extension of every stored document
pub const DOCUMENT_EXTENSION: &str = "json";

/// Computes where collections and documents live on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// Resolver rooted at an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolver rooted at `config.database_root()`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.database_root())
    }

    pub fn database_root(&self) -> &Path {
        &self.root
    }

    /// `root/name`
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// `root/name/doc_id.json`
    pub fn document_path(&self, name: &str, doc_id: &str) -> PathBuf {
        self.collection_path(name)
            .join(format!("{}.{}", doc_id, DOCUMENT_EXTENSION))
    }
}
