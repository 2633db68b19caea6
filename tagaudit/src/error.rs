//! Error types for audit setup failures.

use std::path::PathBuf;

use thiserror::Error;

/// A fatal setup error raised before any file is examined.
///
/// Per-file failures (unreadable or corrupt audio files) are never surfaced
/// through this type — they are recorded on the file's [`FileReport`] and the
/// scan continues.
///
/// [`FileReport`]: crate::FileReport
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuditError {
    /// The scan root does not exist.
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The scan root exists but is not a directory.
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// An exclude glob pattern could not be parsed.
    #[error("invalid exclude glob pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The offending pattern as given.
        pattern: String,
        /// The underlying glob parse error.
        source: glob::PatternError,
    },
}
