//! File scanning utilities
//!
//! Provides note discovery and filtering across a corpus directory.

use crate::config::CorpusConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File scanner with configurable filters
pub struct FileScanner {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_patterns: Vec<String>,
}

impl FileScanner {
    /// Create a new file scanner rooted at the given path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Filter by file extensions (e.g., "md", "markdown")
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add patterns to exclude (glob patterns)
    pub fn exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude_patterns = patterns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Scan and return matching files, sorted by path.
    ///
    /// The sort keeps report ordering stable across runs.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            // The root itself may be dot-named (~/.notes); only descendants
            // are subject to the hidden filter.
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Check extension filter
            if !self.extensions.is_empty() {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if !self.extensions.iter().any(|e| e == ext) {
                    continue;
                }
            }

            // Check exclude patterns
            let path_str = path.to_string_lossy();
            if self.should_exclude(&path_str) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    fn should_exclude(&self, path_str: &str) -> bool {
        self.exclude_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|pat| pat.matches(path_str))
                .unwrap_or(false)
        })
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.') && n != "." && n != "..")
        .unwrap_or(false)
}

/// Scan for Markdown notes in a corpus directory
pub fn scan_notes(root: &Path, config: &CorpusConfig) -> Result<Vec<PathBuf>> {
    let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();
    let excludes: Vec<&str> = config.exclude.iter().map(String::as_str).collect();

    FileScanner::new(root)
        .with_extensions(&extensions)
        .exclude(&excludes)
        .scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, "# stub\n").unwrap();
    }

    #[test]
    fn test_file_scanner_new() {
        let scanner = FileScanner::new("/tmp");
        assert_eq!(scanner.root, PathBuf::from("/tmp"));
        assert!(scanner.extensions.is_empty());
    }

    #[test]
    fn test_scan_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Optionals.md"));
        touch(&dir.path().join("notes.txt"));

        let files = FileScanner::new(dir.path())
            .with_extensions(&["md"])
            .scan()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Optionals.md"));
    }

    #[test]
    fn test_scan_skips_hidden_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".obsidian")).unwrap();
        touch(&dir.path().join(".obsidian").join("cache.md"));
        touch(&dir.path().join("Plan.md"));

        let files = FileScanner::new(dir.path())
            .with_extensions(&["md"])
            .scan()
            .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_scan_accepts_dot_named_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(".notes");
        fs::create_dir(&root).unwrap();
        touch(&root.join("Plan.md"));
        fs::create_dir(root.join(".obsidian")).unwrap();
        touch(&root.join(".obsidian").join("cache.md"));

        let files = FileScanner::new(&root)
            .with_extensions(&["md"])
            .scan()
            .unwrap();

        // The root is exempt from the hidden filter; its hidden children are not
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Plan.md"));
    }

    #[test]
    fn test_scan_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Zeta.md"));
        touch(&dir.path().join("Alpha.md"));

        let files = FileScanner::new(dir.path())
            .with_extensions(&["md"])
            .scan()
            .unwrap();

        assert!(files[0].ends_with("Alpha.md"));
        assert!(files[1].ends_with("Zeta.md"));
    }

    #[test]
    fn test_scan_exclude_glob() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Archive")).unwrap();
        touch(&dir.path().join("Archive").join("Old.md"));
        touch(&dir.path().join("Current.md"));

        let files = FileScanner::new(dir.path())
            .with_extensions(&["md"])
            .exclude(&["**/Archive/**"])
            .scan()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Current.md"));
    }
}
