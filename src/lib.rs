//! # FileDB
//!
//! A document store that keeps every record as a file:
//! - A database is a directory (`<cwd>/.data` unless configured otherwise)
//! - A collection is a subdirectory, created lazily on first write
//! - A document is `<collection>/<doc_id>.json` holding exactly the caller's JSON
//! - Exclusive-create writes are the only concurrency control
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Database                              │
//! │            (root init, collection binding)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Collection                             │
//! │       create / get / get_all / update / delete               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │PathResolver │          │ DirectoryOps │──▶ DiagnosticSink
//!   │   (pure)    │          │    (I/O)     │
//!   └─────────────┘          └──────┬───────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │ Filesystem  │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filedb::{Config, Database};
//! use serde_json::json;
//!
//! let db = Database::open(Config::builder().database_name("testdb").build())?;
//! let users = db.collection("users")?;
//!
//! users.create("11111111", &json!({ "name": "john doe" }))?;
//! users.update("11111111", &json!({ "email": "john.doe@mail.com" }))?;
//! assert!(users.get("11111111").is_some());
//! # Ok::<(), filedb::FileDbError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod fs;
pub mod path;
pub mod name;
pub mod document;
pub mod collection;
pub mod database;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileDbError, NameKind, Result};
pub use config::Config;
pub use collection::Collection;
pub use database::Database;
pub use document::Document;
pub use path::PathResolver;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FileDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
