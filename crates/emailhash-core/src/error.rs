use std::path::PathBuf;

/// Errors that can occur while hashing or persisting an email digest.
#[derive(Debug, thiserror::Error)]
pub enum EmailHashError {
    #[error("failed to write digest to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
