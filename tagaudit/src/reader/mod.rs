//! Tag-reader collaborator boundary.
//!
//! The audit engine never talks to a tag-parsing library directly; it goes
//! through the narrow [`TagReader`] trait so the production reader (lofty)
//! can be replaced with a scripted fake in tests. The trait's contract
//! distinguishes the two per-file failure shapes the report model needs:
//!
//! - `Ok(None)` — the file is unreadable or of an unsupported format.
//! - `Err(_)` — the parser failed mid-read.

pub mod lofty;

use std::path::Path;

use thiserror::Error;

pub use self::lofty::LoftyReader;

/// A parse-time failure from a tag reader.
///
/// Recorded on the file's report; never aborts a scan.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TagReadError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl TagReadError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The tag fields the audit cares about, extracted from one file.
///
/// A file with no tag container at all is represented as all-`None` with
/// zero pictures — every field then reads as missing.
#[derive(Debug, Clone, Default)]
pub struct AudioTags {
    /// Album title, verbatim from the tag.
    pub album: Option<String>,
    /// Lead artist, verbatim from the tag.
    pub artist: Option<String>,
    /// Track number; tuple and `"3/12"` style values reduce to the leading
    /// number.
    pub track_number: Option<u32>,
    /// Embedded pictures across all tag containers.
    pub picture_count: usize,
}

/// Capability interface for reading audio tags from a file.
pub trait TagReader {
    /// Read the tag set of the file at `path`.
    ///
    /// Returns `Ok(None)` when the file cannot be read or is not a
    /// supported format.
    ///
    /// # Errors
    ///
    /// Returns a [`TagReadError`] when parsing fails partway through.
    fn read_tags(&self, path: &Path) -> Result<Option<AudioTags>, TagReadError>;
}
