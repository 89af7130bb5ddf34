//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write content to file with standardized error handling.
///
/// Creates the file or truncates an existing one.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Rename a file or directory with standardized error handling.
pub fn rename(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::rename(from, to)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Recursively copy a directory tree, merging into `dst` if it already exists.
///
/// Existing files in `dst` are overwritten; files only present in `dst` are
/// left untouched.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("create {}", dst.display())))
    })?;

    for entry in fs::read_dir(src)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", src.display()))))?
    {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some("read dir entry".into())))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!("copy {}", src_path.display())),
                )
            })?;
        }
    }
    Ok(())
}
