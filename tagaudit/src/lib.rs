//! # tagaudit
//!
//! Music-library metadata auditor. Scans a directory tree for MP3/MP4/M4A
//! files and reports which ones are missing album artwork, album, artist, or
//! track number.
//!
//! The engine is split between **discovery** (filesystem enumeration), the
//! **tag reader** collaborator (lofty in production, fakes in tests), and
//! **reporting** (aggregation plus text/JSON/condensed formatters).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use tagaudit::{ReportFormat, ScanOptions, output, scan};
//!
//! let mut options = ScanOptions::new(PathBuf::from("/music"));
//! options.exclude = vec!["Podcasts/*".to_owned()];
//!
//! let report = scan(&options).unwrap();
//! println!("Files scanned: {}", report.total_files());
//! println!("Files with issues: {}", report.issue_count());
//!
//! let text = output::render(&report, ReportFormat::Text, false).unwrap();
//! print!("{text}");
//! ```

mod config;
mod error;
pub mod output;
mod reader;
mod report;
mod strategy;
mod validator;

pub use config::ScanOptions;
pub use error::AuditError;
pub use output::ReportFormat;
pub use reader::{AudioTags, LoftyReader, TagReadError, TagReader};
pub use report::{AuditReport, FileKind, FileReport, MissingField};

/// Scan a music directory with the production (lofty-backed) tag reader.
///
/// # Errors
///
/// Returns an [`AuditError`] when the root is missing, not a directory, or
/// an exclude pattern is malformed. Per-file read failures never error —
/// they are recorded on the affected file's [`FileReport`].
pub fn scan(options: &ScanOptions) -> Result<AuditReport, AuditError> {
    scan_with(&LoftyReader, options)
}

/// Scan a music directory through an arbitrary [`TagReader`].
///
/// Every enumerated file with a supported extension yields exactly one
/// [`FileReport`], whether or not reading succeeds; results come back in
/// path order.
///
/// # Errors
///
/// Same setup-failure contract as [`scan`].
pub fn scan_with(reader: &dyn TagReader, options: &ScanOptions) -> Result<AuditReport, AuditError> {
    let files = strategy::fs::find_files(options)?;
    tracing::debug!(
        "found {} candidate files under {}",
        files.len(),
        options.root.display()
    );

    let mut results = Vec::with_capacity(files.len());
    for path in &files {
        // find_files only yields supported extensions.
        let Some(kind) = FileKind::from_path(path) else {
            continue;
        };
        let result = validator::audit_file(reader, path, kind);
        if let Some(message) = &result.error {
            tracing::warn!("{}: {message}", path.display());
        }
        results.push(result);
    }

    Ok(AuditReport::new(results))
}
