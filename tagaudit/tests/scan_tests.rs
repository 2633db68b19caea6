//! Integration tests for `tagaudit::scan_with` and the report formatters.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tagaudit::{
    AudioTags, AuditError, FileKind, MissingField, ReportFormat, ScanOptions, TagReadError,
    TagReader, output, scan_with,
};
use tempfile::TempDir;

#[derive(Clone)]
enum Outcome {
    Tags(AudioTags),
    Unreadable,
    Fails(String),
}

/// Scripted reader keyed on file name; unscripted files read as complete.
struct FakeReader {
    outcomes: HashMap<String, Outcome>,
    fallback: Outcome,
}

impl FakeReader {
    fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            fallback: Outcome::Tags(complete_tags()),
        }
    }

    fn with(mut self, name: &str, outcome: Outcome) -> Self {
        self.outcomes.insert(name.to_owned(), outcome);
        self
    }
}

impl TagReader for FakeReader {
    fn read_tags(&self, path: &Path) -> Result<Option<AudioTags>, TagReadError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match self.outcomes.get(&name).unwrap_or(&self.fallback) {
            Outcome::Tags(tags) => Ok(Some(tags.clone())),
            Outcome::Unreadable => Ok(None),
            Outcome::Fails(message) => Err(TagReadError::new(message.clone())),
        }
    }
}

fn complete_tags() -> AudioTags {
    AudioTags {
        album: Some("Kind of Blue".to_owned()),
        artist: Some("Miles Davis".to_owned()),
        track_number: Some(1),
        picture_count: 1,
    }
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"audio bytes").unwrap();
}

#[test]
fn nonexistent_directory_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let options = ScanOptions::new(tmp.path().join("does_not_exist"));
    let err = scan_with(&FakeReader::new(), &options).unwrap_err();
    assert!(matches!(err, AuditError::NotFound(_)));
    assert!(err.to_string().contains("directory not found"));
}

#[test]
fn file_root_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "song.mp3");
    let options = ScanOptions::new(tmp.path().join("song.mp3"));
    let err = scan_with(&FakeReader::new(), &options).unwrap_err();
    assert!(matches!(err, AuditError::NotADirectory(_)));
}

#[test]
fn invalid_exclude_pattern_fails_setup() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "song.mp3");
    let mut options = ScanOptions::new(tmp.path());
    options.exclude = vec!["[unclosed".to_owned()];
    let err = scan_with(&FakeReader::new(), &options).unwrap_err();
    assert!(matches!(err, AuditError::InvalidExcludePattern { .. }));
}

#[test]
fn empty_directory_scans_zero_files() {
    let tmp = TempDir::new().unwrap();
    let report = scan_with(&FakeReader::new(), &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(report.total_files(), 0);

    let text = output::render(&report, ReportFormat::Text, false).unwrap();
    assert!(text.contains("Total files scanned: 0"), "got: {text}");
    assert!(!text.contains("FILES WITH MISSING METADATA:"));
    assert!(!text.contains("FILES WITH READ ERRORS:"));
}

#[test]
fn only_supported_extensions_are_scanned() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "a.mp3");
    touch(tmp.path(), "b.MP4");
    touch(tmp.path(), "c.m4a");
    touch(tmp.path(), "notes.txt");
    touch(tmp.path(), "d.flac");

    let report = scan_with(&FakeReader::new(), &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(report.total_files(), 3);

    let kinds: Vec<_> = report.results.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, [FileKind::Mp3, FileKind::Mp4, FileKind::M4a]);
}

#[test]
fn non_recursive_scan_stays_at_top_level() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "top.mp3");
    let sub = tmp.path().join("album");
    fs::create_dir(&sub).unwrap();
    touch(&sub, "nested.mp3");

    let recursive = scan_with(&FakeReader::new(), &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(recursive.total_files(), 2);

    let mut options = ScanOptions::new(tmp.path());
    options.recursive = false;
    let flat = scan_with(&FakeReader::new(), &options).unwrap();
    assert_eq!(flat.total_files(), 1);
    assert!(flat.results[0].path.ends_with("top.mp3"));
}

#[test]
fn exclude_patterns_reduce_the_scan() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "keep.mp3");
    touch(tmp.path(), "skip.m4a");

    let mut options = ScanOptions::new(tmp.path());
    options.exclude = vec!["*.m4a".to_owned()];
    let report = scan_with(&FakeReader::new(), &options).unwrap();
    assert_eq!(report.total_files(), 1);
    assert!(report.results[0].path.ends_with("keep.mp3"));
}

#[test]
fn blank_album_and_absent_artist_are_flagged_in_order() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "song.mp3");

    let mut tags = complete_tags();
    tags.album = Some("   ".to_owned());
    tags.artist = None;
    let reader = FakeReader::new().with("song.mp3", Outcome::Tags(tags));

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    let result = &report.results[0];
    assert!(result.has_issues());
    assert_eq!(result.missing, [MissingField::Album, MissingField::Artist]);
}

#[test]
fn file_without_any_tags_is_missing_everything() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "bare.m4a");
    let reader = FakeReader::new().with("bare.m4a", Outcome::Tags(AudioTags::default()));

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(
        report.results[0].missing_fields(),
        ["Album Artwork", "Album", "Artist", "Track Number"]
    );
}

#[test]
fn unreadable_file_gets_error_and_no_flags() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "broken.mp3");
    let reader = FakeReader::new().with("broken.mp3", Outcome::Unreadable);

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    let result = &report.results[0];
    assert_eq!(
        result.error.as_deref(),
        Some("Unable to read file or unsupported format")
    );
    assert!(!result.has_issues());
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.missing_count(MissingField::AlbumArt), 0);
}

#[test]
fn parse_failure_is_isolated_to_its_file() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "bad.mp3");
    touch(tmp.path(), "good.mp3");
    let reader = FakeReader::new().with("bad.mp3", Outcome::Fails("corrupted frame".to_owned()));

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(report.total_files(), 2);

    let bad = report.results.iter().find(|r| r.path.ends_with("bad.mp3")).unwrap();
    assert_eq!(bad.error.as_deref(), Some("Error reading file: corrupted frame"));

    let good = report.results.iter().find(|r| r.path.ends_with("good.mp3")).unwrap();
    assert!(good.error.is_none());
    assert!(!good.has_issues());
}

#[test]
fn text_report_lists_missing_metadata() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "song.mp3");

    let mut tags = complete_tags();
    tags.picture_count = 0;
    tags.artist = None;
    let reader = FakeReader::new().with("song.mp3", Outcome::Tags(tags));

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    let text = output::render(&report, ReportFormat::Text, false).unwrap();

    assert!(text.contains("MUSIC LIBRARY METADATA VALIDATION REPORT"), "got: {text}");
    assert!(text.contains("Files with metadata issues: 1"));
    assert!(text.contains("FILES WITH MISSING METADATA:"));
    assert!(text.contains("Type: MP3"));
    assert!(text.contains("Missing: Album Artwork, Artist"));
    assert!(text.contains("Album Artwork: 1 files"));
    assert!(!text.contains("FILES WITH READ ERRORS:"));
}

#[test]
fn unreadable_file_appears_only_under_read_errors() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "broken.mp3");
    let reader = FakeReader::new().with("broken.mp3", Outcome::Unreadable);

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    let text = output::render(&report, ReportFormat::Text, false).unwrap();

    assert!(text.contains("FILES WITH READ ERRORS:"), "got: {text}");
    assert!(text.contains("Error: Unable to read file or unsupported format"));
    assert!(!text.contains("FILES WITH MISSING METADATA:"));
    // No summary rows: the unreadable file asserts nothing about its fields.
    assert!(!text.contains("Album Artwork:"));
}

#[test]
fn json_report_contract() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "clean.mp3");
    touch(tmp.path(), "flagged.m4a");
    touch(tmp.path(), "broken.mp4");

    let mut flagged = complete_tags();
    flagged.picture_count = 0;
    flagged.track_number = None;
    let reader = FakeReader::new()
        .with("flagged.m4a", Outcome::Tags(flagged))
        .with("broken.mp4", Outcome::Unreadable);

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    let rendered = output::render(&report, ReportFormat::Json, false).unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert!(json.get("generated").is_some());
    assert_eq!(json["total_files"], 3);
    assert_eq!(json["files_with_issues"], 1);
    assert_eq!(json["files_with_errors"], 1);

    // All four summary keys are always present, independent of error state.
    assert_eq!(json["summary"]["missing_album_art"], 1);
    assert_eq!(json["summary"]["missing_album"], 0);
    assert_eq!(json["summary"]["missing_artist"], 0);
    assert_eq!(json["summary"]["missing_track_number"], 1);

    // Only flagged and broken files are listed.
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);

    let flagged_entry = files
        .iter()
        .find(|f| f["filepath"].as_str().unwrap().ends_with("flagged.m4a"))
        .unwrap();
    assert_eq!(flagged_entry["file_type"], "m4a");
    assert_eq!(
        flagged_entry["missing_metadata"],
        serde_json::json!(["Album Artwork", "Track Number"])
    );
    assert!(flagged_entry["error"].is_null());

    let broken_entry = files
        .iter()
        .find(|f| f["filepath"].as_str().unwrap().ends_with("broken.mp4"))
        .unwrap();
    assert_eq!(broken_entry["missing_metadata"], serde_json::json!([]));
    assert_eq!(
        broken_entry["error"],
        "Unable to read file or unsupported format"
    );
}

#[test]
fn condensed_report_lists_only_error_free_missing_art() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "noart1.mp3");
    touch(tmp.path(), "noart2.m4a");
    touch(tmp.path(), "broken.mp3");
    touch(tmp.path(), "complete.mp3");

    let mut no_art = complete_tags();
    no_art.picture_count = 0;
    let reader = FakeReader::new()
        .with("noart1.mp3", Outcome::Tags(no_art.clone()))
        .with("noart2.m4a", Outcome::Tags(no_art))
        .with("broken.mp3", Outcome::Unreadable);

    let report = scan_with(&reader, &ScanOptions::new(tmp.path())).unwrap();
    assert_eq!(report.missing_art_count(), 2);

    let condensed = output::render(&report, ReportFormat::Text, true).unwrap();
    let lines: Vec<_> = condensed.lines().collect();
    assert_eq!(lines.len(), 3, "got: {condensed}");
    assert!(lines[0].ends_with("noart1.mp3"));
    assert!(lines[1].ends_with("noart2.m4a"));
    assert_eq!(lines[2], "Total files missing album artwork: 2");
}

#[test]
fn json_format_takes_precedence_over_condensed() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "song.mp3");

    let report = scan_with(&FakeReader::new(), &ScanOptions::new(tmp.path())).unwrap();
    let rendered = output::render(&report, ReportFormat::Json, true).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&rendered).is_ok());
}
