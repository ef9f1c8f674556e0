use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mojifix
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("anchor text not found in {}: {:?}", .path.display(), .anchor)]
    AnchorNotFound { path: PathBuf, anchor: String },

    #[error("IO error: {} (path: {})", .source, .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new anchor-not-found error
    pub fn anchor_not_found(path: impl Into<PathBuf>, anchor: impl Into<String>) -> Self {
        Self::AnchorNotFound {
            path: path.into(),
            anchor: anchor.into(),
        }
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, path)
}
