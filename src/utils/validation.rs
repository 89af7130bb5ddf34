//! Input validation primitives.

use std::path::Path;

use crate::error::{Error, Result};

/// Require a path to exist and be a directory.
///
/// `not_found` builds the error for the caller's context, so a missing
/// project and a missing template report under their own codes.
pub fn require_dir<F>(path: &Path, not_found: F) -> Result<&Path>
where
    F: FnOnce(&Path) -> Error,
{
    if path.is_dir() {
        Ok(path)
    } else {
        Err(not_found(path))
    }
}

/// Require that nothing exists at `path` yet.
pub fn require_absent(path: &Path) -> Result<&Path> {
    if path.exists() {
        Err(Error::project_already_exists(path.display().to_string()))
    } else {
        Ok(path)
    }
}
