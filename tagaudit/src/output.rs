//! Report formatters.
//!
//! Provides text, JSON, and condensed renderings of an [`AuditReport`].
//! Formatters write to a caller-supplied writer and perform no filesystem
//! I/O — choosing a destination (stdout or a file) is the caller's concern.

use std::io::Write;

use serde::Serialize;

use crate::report::{AuditReport, FileKind, MissingField};

/// Selectable report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable sections with a summary table.
    Text,
    /// One machine-readable JSON object.
    Json,
}

/// Render a report to a string, applying the format precedence: JSON wins
/// over condensed, condensed over plain text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(report: &AuditReport, format: ReportFormat, condensed: bool) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match format {
        ReportFormat::Json => write_json(report, &mut buf)?,
        ReportFormat::Text if condensed => write_condensed(report, &mut buf)?,
        ReportFormat::Text => write_text(report, &mut buf)?,
    }
    Ok(String::from_utf8(buf)?)
}

/// Format a report as human-readable plain text.
///
/// Files with issues and files with read errors get their own sections,
/// rendered only when non-empty; the per-field summary shows nonzero counts
/// in canonical field order.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text(report: &AuditReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "MUSIC LIBRARY METADATA VALIDATION REPORT")?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "Generated: {}", report.generated.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer, "Total files scanned: {}", report.total_files())?;
    writeln!(writer, "Files with metadata issues: {}", report.issue_count())?;
    writeln!(writer, "Files with read errors: {}", report.error_count())?;
    writeln!(writer)?;

    if report.issue_count() > 0 {
        writeln!(writer, "FILES WITH MISSING METADATA:")?;
        writeln!(writer, "{}", "-".repeat(40))?;
        for result in report.issues() {
            writeln!(writer)?;
            writeln!(writer, "File: {}", result.path.display())?;
            writeln!(writer, "Type: {}", result.kind.as_str().to_ascii_uppercase())?;
            writeln!(writer, "Missing: {}", result.missing_fields().join(", "))?;
        }
        writeln!(writer)?;
    }

    if report.error_count() > 0 {
        writeln!(writer, "FILES WITH READ ERRORS:")?;
        writeln!(writer, "{}", "-".repeat(40))?;
        for result in report.errors() {
            writeln!(writer)?;
            writeln!(writer, "File: {}", result.path.display())?;
            if let Some(error) = &result.error {
                writeln!(writer, "Error: {error}")?;
            }
        }
        writeln!(writer)?;
    }

    writeln!(writer, "SUMMARY BY ISSUE TYPE:")?;
    writeln!(writer, "{}", "-".repeat(40))?;
    for field in MissingField::ALL {
        let count = report.missing_count(field);
        if count > 0 {
            writeln!(writer, "{}: {count} files", field.label())?;
        }
    }

    Ok(())
}

/// Serialization view of the JSON report contract.
#[derive(Serialize)]
struct JsonReport {
    generated: String,
    total_files: usize,
    files_with_issues: usize,
    files_with_errors: usize,
    summary: MissingSummary,
    files: Vec<JsonFile>,
}

/// Per-field counts over all results, error state notwithstanding.
/// All four keys are always present, even at zero.
#[derive(Serialize)]
struct MissingSummary {
    missing_album_art: usize,
    missing_album: usize,
    missing_artist: usize,
    missing_track_number: usize,
}

#[derive(Serialize)]
struct JsonFile {
    filepath: String,
    file_type: FileKind,
    missing_metadata: Vec<&'static str>,
    error: Option<String>,
}

/// Format a report as one pretty-printed JSON object.
///
/// Only files with issues or read errors appear in the `files` list; the
/// summary counts cover every scanned file.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &AuditReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let files = report
        .results
        .iter()
        .filter(|r| r.has_issues() || r.error.is_some())
        .map(|r| JsonFile {
            filepath: r.path.display().to_string(),
            file_type: r.kind,
            missing_metadata: r.missing_fields(),
            error: r.error.clone(),
        })
        .collect();

    let view = JsonReport {
        generated: report.generated.to_rfc3339(),
        total_files: report.total_files(),
        files_with_issues: report.issue_count(),
        files_with_errors: report.error_count(),
        summary: MissingSummary {
            missing_album_art: report.missing_count(MissingField::AlbumArt),
            missing_album: report.missing_count(MissingField::Album),
            missing_artist: report.missing_count(MissingField::Artist),
            missing_track_number: report.missing_count(MissingField::TrackNumber),
        },
        files,
    };

    let json = serde_json::to_string_pretty(&view)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format the condensed report: one path per line for every error-free file
/// missing album artwork, then a trailing total.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_condensed(report: &AuditReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for result in report.missing_art_files() {
        writeln!(writer, "{}", result.path.display())?;
    }
    writeln!(
        writer,
        "Total files missing album artwork: {}",
        report.missing_art_count()
    )?;
    Ok(())
}
