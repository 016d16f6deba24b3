//! Filesystem helpers used by the scaffold steps.
//!
//! Every helper takes absolute or root-joined paths; none of them consult the
//! process working directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ScaffoldError};

/// Result of a removal or clearing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The target did not exist. Not an error.
    Skipped,
}

/// Write `contents` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| ScaffoldError::filesystem(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Copy `src` over `dst`, creating the destination's parent directories.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    ensure_parent(dst)?;
    fs::copy(src, dst).map_err(|e| ScaffoldError::filesystem(src, e))?;
    debug!(from = %src.display(), to = %dst.display(), "copied file");
    Ok(())
}

/// Truncate an existing file to zero bytes.
pub fn clear_file(path: &Path) -> Result<RemoveOutcome> {
    if !path.is_file() {
        info!(path = %path.display(), "nothing to clear, file not found");
        return Ok(RemoveOutcome::Skipped);
    }
    fs::write(path, "").map_err(|e| ScaffoldError::filesystem(path, e))?;
    debug!(path = %path.display(), "cleared file");
    Ok(RemoveOutcome::Removed)
}

/// Delete `path` if it is present.
pub fn remove_if_exists(path: &Path) -> Result<RemoveOutcome> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed file");
            Ok(RemoveOutcome::Removed)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "skipping removal, file not found");
            Ok(RemoveOutcome::Skipped)
        }
        Err(e) => Err(ScaffoldError::filesystem(path, e)),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::filesystem(parent, e))?;
        }
    }
    Ok(())
}
