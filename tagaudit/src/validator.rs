//! Per-file metadata rules.
//!
//! Turns a tag reader's outcome for one file into a [`FileReport`]. Pure
//! with respect to the filesystem — all I/O happens behind the reader.

use std::path::{Path, PathBuf};

use crate::reader::{AudioTags, TagReader};
use crate::report::{FileKind, FileReport, MissingField};

/// Message recorded when the reader yields no structured tag set.
const UNREADABLE: &str = "Unable to read file or unsupported format";

/// Validate one file through the given reader.
///
/// Never fails: reader errors become the report's `error` field and leave
/// the missing-field list empty, so one bad file cannot abort a scan.
pub fn audit_file(reader: &dyn TagReader, path: &Path, kind: FileKind) -> FileReport {
    match reader.read_tags(path) {
        Ok(Some(tags)) => report_for(path.to_path_buf(), kind, &tags),
        Ok(None) => FileReport {
            path: path.to_path_buf(),
            kind,
            missing: Vec::new(),
            error: Some(UNREADABLE.to_owned()),
        },
        Err(err) => FileReport {
            path: path.to_path_buf(),
            kind,
            missing: Vec::new(),
            error: Some(format!("Error reading file: {err}")),
        },
    }
}

/// Apply the field rules to a successfully read tag set.
///
/// Pushing in declaration order keeps the missing list in the canonical
/// field order by construction.
fn report_for(path: PathBuf, kind: FileKind, tags: &AudioTags) -> FileReport {
    let mut missing = Vec::new();

    if tags.picture_count == 0 {
        missing.push(MissingField::AlbumArt);
    }
    if is_blank(tags.album.as_deref()) {
        missing.push(MissingField::Album);
    }
    if is_blank(tags.artist.as_deref()) {
        missing.push(MissingField::Artist);
    }
    if tags.track_number.is_none_or(|n| n == 0) {
        missing.push(MissingField::TrackNumber);
    }

    FileReport {
        path,
        kind,
        missing,
        error: None,
    }
}

/// A textual tag counts as present only when it has non-whitespace content.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}
