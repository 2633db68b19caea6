//! Audit report types.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

/// A metadata field that can be absent from an audio file.
///
/// The variant order is the canonical display order everywhere a list of
/// missing fields appears — reports, summaries, and serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissingField {
    /// No embedded picture in any tag container.
    #[serde(rename = "Album Artwork")]
    AlbumArt,
    /// Album tag absent or blank.
    #[serde(rename = "Album")]
    Album,
    /// Artist tag absent or blank.
    #[serde(rename = "Artist")]
    Artist,
    /// Track number absent or not positive.
    #[serde(rename = "Track Number")]
    TrackNumber,
}

impl MissingField {
    /// Every field, in canonical display order.
    pub const ALL: [Self; 4] = [Self::AlbumArt, Self::Album, Self::Artist, Self::TrackNumber];

    /// Human-readable label used in all report formats.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AlbumArt => "Album Artwork",
            Self::Album => "Album",
            Self::Artist => "Artist",
            Self::TrackNumber => "Track Number",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Supported audio file families, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Mp3,
    Mp4,
    M4a,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively.
    /// Returns `None` for anything that is not a supported audio file.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "mp4" => Some(Self::Mp4),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::M4a => "m4a",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation outcome for a single audio file.
///
/// Exactly one of these exists per enumerated file, whether or not reading
/// succeeded. When `error` is set, the file could not be validated and
/// `missing` is empty — an unreadable file asserts nothing about its tags.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileReport {
    /// Path of the examined file.
    pub path: PathBuf,
    /// File family, from the extension.
    pub kind: FileKind,
    /// Missing fields in canonical order.
    pub missing: Vec<MissingField>,
    /// Read/parse failure, if the tag reader could not produce a tag set.
    pub error: Option<String>,
}

impl FileReport {
    /// Whether any metadata field is missing.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Whether a specific field is missing.
    #[must_use]
    pub fn is_missing(&self, field: MissingField) -> bool {
        self.missing.contains(&field)
    }

    /// Labels of the missing fields, in canonical order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.missing.iter().copied().map(MissingField::label).collect()
    }
}

/// Aggregate result of one scan run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// When the results were gathered.
    pub generated: DateTime<Local>,
    /// One entry per enumerated file, in path order.
    pub results: Vec<FileReport>,
}

impl AuditReport {
    /// Wrap scan results, stamping the generation time.
    #[must_use]
    pub fn new(results: Vec<FileReport>) -> Self {
        Self {
            generated: Local::now(),
            results,
        }
    }

    /// Total number of files examined.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    /// Files with at least one missing field.
    pub fn issues(&self) -> impl Iterator<Item = &FileReport> {
        self.results.iter().filter(|r| r.has_issues())
    }

    /// Files that could not be read or parsed.
    pub fn errors(&self) -> impl Iterator<Item = &FileReport> {
        self.results.iter().filter(|r| r.error.is_some())
    }

    /// Number of files with at least one missing field.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues().count()
    }

    /// Number of files that could not be read or parsed.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of files missing a specific field.
    #[must_use]
    pub fn missing_count(&self, field: MissingField) -> usize {
        self.results.iter().filter(|r| r.is_missing(field)).count()
    }

    /// Error-free files missing album artwork — the condensed report's rows.
    pub fn missing_art_files(&self) -> impl Iterator<Item = &FileReport> {
        self.results
            .iter()
            .filter(|r| r.error.is_none() && r.is_missing(MissingField::AlbumArt))
    }

    /// Number of error-free files missing album artwork.
    #[must_use]
    pub fn missing_art_count(&self) -> usize {
        self.missing_art_files().count()
    }
}
