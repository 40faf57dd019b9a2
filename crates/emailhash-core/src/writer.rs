use crate::EmailHashError;
use std::fs;
use std::path::Path;

/// File the digest is written to when no other path is given, relative to
/// the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "hash.email";

/// Create or truncate the file at `path` and write `content` to it.
///
/// No newline is appended. The handle is closed before returning, on success
/// and on failure.
pub fn write(content: &str, path: &Path) -> Result<(), EmailHashError> {
    fs::write(path, content).map_err(|source| EmailHashError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "digest written");
    Ok(())
}
