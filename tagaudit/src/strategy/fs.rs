//! Filesystem discovery for the audit pipeline.
//!
//! Enumerates candidate audio files under a root directory. Symlinks are not
//! followed by default, traversal depth is bounded, and the returned paths
//! are sorted so report order is deterministic.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::ScanOptions;
use crate::error::AuditError;
use crate::report::FileKind;

/// Check if a path matches any of the exclude patterns, either by full path
/// or by bare file name.
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Compile exclude globs up front so a bad pattern fails the whole scan
/// before any file is touched.
///
/// # Errors
///
/// Returns [`AuditError::InvalidExcludePattern`] for the first pattern that
/// does not parse.
pub fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, AuditError> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match Pattern::new(pattern) {
            Ok(p) => compiled.push(p),
            Err(source) => {
                return Err(AuditError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                });
            }
        }
    }
    Ok(compiled)
}

/// Find all supported audio files under the configured root.
///
/// Walk-level failures (permission denied, filesystem loops) concern no
/// candidate file, so they are logged and skipped rather than modeled as
/// results.
///
/// # Errors
///
/// Returns [`AuditError::NotFound`] or [`AuditError::NotADirectory`] when
/// the root is unusable, and [`AuditError::InvalidExcludePattern`] for a bad
/// exclude glob — all before enumeration starts.
pub fn find_files(options: &ScanOptions) -> Result<Vec<PathBuf>, AuditError> {
    if !options.root.exists() {
        return Err(AuditError::NotFound(options.root.clone()));
    }
    if !options.root.is_dir() {
        return Err(AuditError::NotADirectory(options.root.clone()));
    }

    let exclude_patterns = compile_excludes(&options.exclude)?;
    let max_depth = if options.recursive { options.max_depth } else { 1 };

    let mut files = Vec::new();
    for entry_result in WalkDir::new(&options.root)
        .follow_links(options.follow_links)
        .max_depth(max_depth)
    {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(walk_err) => {
                tracing::warn!("directory traversal error: {walk_err}");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if FileKind::from_path(path).is_none() {
            continue;
        }
        if matches_exclude(path, &exclude_patterns) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    files.dedup();
    Ok(files)
}
