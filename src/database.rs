//! Database Module
//!
//! Owns the database root and hands out [`Collection`] stores.
//!
//! ## Responsibilities
//! - Create the root directory on open (idempotent, best-effort)
//! - Bind collections by name (lazy: no directory until the first `create`)
//! - Enumerate and drop collections
//! - Tear the whole root down on request

use std::path::Path;
use std::sync::Arc;

use crate::collection::Collection;
use crate::config::Config;
use crate::error::{NameKind, Result};
use crate::fs::{DiagnosticSink, DirectoryOps, TracingSink};
use crate::name::validate_name;
use crate::path::PathResolver;

/// Handle to one on-disk database
///
/// Cheap to clone; clones share the resolver and the diagnostic sink.
#[derive(Debug, Clone)]
pub struct Database {
    /// Configuration the database was opened with
    config: Config,

    /// Path computation shared with every collection
    resolver: Arc<PathResolver>,

    /// Filesystem primitives shared with every collection
    ops: DirectoryOps,

    /// Identity key handed to collections
    identity_field: Arc<str>,
}

impl Database {
    /// Open (and initialize) a database, logging suppressed errors via `tracing`
    pub fn open(config: Config) -> Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Open a database with a custom diagnostic sink
    ///
    /// On open:
    /// 1. Validate the config
    /// 2. Resolve the root path (`base_dir/database_name`)
    /// 3. Create the root directory if missing (failures go to the sink)
    pub fn with_sink(config: Config, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        config.validate()?;

        let resolver = Arc::new(PathResolver::from_config(&config));
        let ops = DirectoryOps::new(sink);

        ops.create_directory_all(resolver.database_root());

        tracing::info!(root = %resolver.database_root().display(), "database initialized");

        let identity_field: Arc<str> = Arc::from(config.identity_field.as_str());

        Ok(Self {
            config,
            resolver,
            ops,
            identity_field,
        })
    }

    /// Open the database named by `DB_NAME` (default `.data`) in the working directory
    pub fn open_from_env() -> Result<Self> {
        Self::open(Config::from_env())
    }

    /// Bind a store to the collection `name`; no directory is created
    pub fn collection(&self, name: &str) -> Result<Collection> {
        Collection::new(
            name,
            Arc::clone(&self.resolver),
            self.ops.clone(),
            Arc::clone(&self.identity_field),
            self.config.read_parallelism,
        )
    }

    /// Names of the collection directories currently on disk, sorted
    pub fn list_collections(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .ops
            .list_entries(self.root())?
            .into_iter()
            .filter(|entry| entry.full_path.is_dir())
            .map(|entry| entry.name)
            .collect();

        names.sort();
        Ok(names)
    }

    /// Remove a collection directory and all its documents (best-effort)
    pub fn drop_collection(&self, name: &str) -> Result<()> {
        validate_name(NameKind::Collection, name)?;

        let path = self.resolver.collection_path(name);
        self.ops.remove_directory_recursive(&path);

        tracing::info!(collection = name, "dropped collection");
        Ok(())
    }

    /// Remove the database root and everything under it (best-effort)
    pub fn destroy(self) {
        self.ops.remove_directory_recursive(self.root());
        tracing::info!(root = %self.root().display(), "database destroyed");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Root directory of the database
    pub fn root(&self) -> &Path {
        self.resolver.database_root()
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
