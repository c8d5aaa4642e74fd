//! Configuration for FileDB
//!
//! Centralized configuration with sensible defaults. A `Config` is handed to
//! [`Database::open`](crate::Database::open) explicitly; nothing is read from
//! process-wide state after that point.

use std::path::PathBuf;

use crate::error::{FileDbError, Result};

/// Environment variable consulted by [`Config::from_env`]
pub const DB_NAME_ENV: &str = "DB_NAME";

/// Database directory name used when none is configured
pub const DEFAULT_DATABASE_NAME: &str = ".data";

/// Key synthesized into composite documents returned to callers
pub const DEFAULT_IDENTITY_FIELD: &str = "_id";

/// Main configuration for a FileDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------------
    /// Directory the database lives in (defaults to the working directory)
    /// Internal structure:
    ///   {base_dir}/{database_name}/
    ///     └── {collection}/
    ///           └── {doc_id}.json
    pub base_dir: PathBuf,

    /// Name of the database directory under `base_dir`
    pub database_name: String,

    // -------------------------------------------------------------------------
    // Documents
    // -------------------------------------------------------------------------
    /// Identity key added to composite documents on the way out
    pub identity_field: String,

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------
    /// Max reader threads used by `Collection::get_all`
    pub read_parallelism: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            identity_field: DEFAULT_IDENTITY_FIELD.to_string(),
            read_parallelism: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config with the database name overridden by `DB_NAME`, if set
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name) = lookup(DB_NAME_ENV) {
            if !name.is_empty() {
                config.database_name = name;
            }
        }
        config
    }

    /// Root directory of the database: `base_dir/database_name`
    pub fn database_root(&self) -> PathBuf {
        self.base_dir.join(&self.database_name)
    }

    /// Reject configurations that cannot name a database root
    pub fn validate(&self) -> Result<()> {
        if self.database_name.is_empty() {
            return Err(FileDbError::Config("database name is empty".to_string()));
        }
        if self.identity_field.is_empty() {
            return Err(FileDbError::Config("identity field is empty".to_string()));
        }
        if self.read_parallelism == 0 {
            return Err(FileDbError::Config("read parallelism must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory that holds the database directory
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the database directory name
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.config.database_name = name.into();
        self
    }

    /// Set the identity key added to returned documents
    pub fn identity_field(mut self, field: impl Into<String>) -> Self {
        self.config.identity_field = field.into();
        self
    }

    /// Set the number of reader threads used by `get_all`
    pub fn read_parallelism(mut self, threads: usize) -> Self {
        self.config.read_parallelism = threads;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
