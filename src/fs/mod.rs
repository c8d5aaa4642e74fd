//! Filesystem Module
//!
//! Raw directory and file primitives plus the sink that receives the errors
//! best-effort operations swallow.
//!
//! ## Error Policy
//! ```text
//! ┌──────────────────────────────┬─────────────────────────────┐
//! │ Operation                    │ On failure                  │
//! ├──────────────────────────────┼─────────────────────────────┤
//! │ create_directory(_all)       │ report to sink, return ()   │
//! │ remove_directory_recursive   │ report to sink, return ()   │
//! │ list_entries                 │ io::Error                   │
//! │ read_file / write_file       │ io::Error                   │
//! │ delete_file                  │ io::Error                   │
//! └──────────────────────────────┴─────────────────────────────┘
//! ```

mod diagnostics;
mod ops;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use ops::{DirEntry, DirectoryOps, WriteMode};
