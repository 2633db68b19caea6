//! Scan configuration.

use std::path::PathBuf;

/// Options controlling directory enumeration.
///
/// Construct with [`ScanOptions::new`] and adjust fields as needed; the
/// defaults match a full recursive scan.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanOptions {
    /// Directory to scan. Required.
    pub root: PathBuf,
    /// Include all subdirectories (default: true). When false, only the top
    /// level of `root` is examined.
    pub recursive: bool,
    /// Exclude patterns (glob format). A file is skipped when its path or
    /// file name matches any pattern.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows a scan to escape
    /// the library root and traverse arbitrary directories.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
}

impl ScanOptions {
    /// Options for a recursive scan of `root` with no excludes.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
        }
    }
}
