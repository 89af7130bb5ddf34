//! Path argument resolution.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Current working directory with standardized error handling.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("get current dir".to_string())))
}

/// Expand `~` and make a user-supplied path absolute against `base`.
///
/// Does not touch the filesystem, so missing paths resolve too.
pub fn resolve_path(input: &str, base: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(input).to_string();
    let path = PathBuf::from(expanded);

    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::internal_io(e.to_string(), Some("locate executable".to_string())))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::internal_io(
            format!("Executable has no parent directory: {}", exe.display()),
            Some("locate executable".to_string()),
        )
    })
}
