//! Name validation for collections and document ids
//!
//! Names become path components, so anything that would escape the
//! collection directory or is illegal on common filesystems is rejected.

use crate::error::{FileDbError, NameKind, Result};

const FORBIDDEN_CHARS: &[char] = &['/', '\\', '\0'];

/// Check that `name` is usable as a single path component
pub fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(FORBIDDEN_CHARS);

    if invalid {
        return Err(FileDbError::InvalidName {
            kind,
            name: name.to_string(),
        });
    }

    Ok(())
}
