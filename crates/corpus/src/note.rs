//! Note and corpus data model
//!
//! A `Note` is a flat record of one Markdown document: no hierarchy, no
//! behavior. The `Corpus` owns every note loaded in a run; records are
//! immutable once loaded.

use crate::parser;
use notelint_core::config::CorpusConfig;
use notelint_core::file_scanner::scan_notes;
use notelint_core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A section heading inside a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    /// Heading text with the marker stripped
    pub text: String,
}

/// One Markdown document in the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Title from the first heading, falling back to the file stem
    pub title: String,
    /// Path the note was loaded from
    pub path: PathBuf,
    /// Section headings in document order
    pub headings: Vec<Heading>,
    /// Cross-reference targets this note emits, in document order
    pub references: Vec<String>,
    /// Number of fenced code blocks
    pub code_blocks: usize,
    /// Raw body text (not serialized into reports)
    #[serde(skip)]
    pub body: String,
}

/// A file that could not be parsed and was skipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path of the unreadable file
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

/// All notes loaded in one run
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Successfully parsed notes, in path order
    pub notes: Vec<Note>,
    /// Files skipped due to parse errors
    pub skipped: Vec<SkippedFile>,
}

impl Corpus {
    /// Load every note under `root`.
    ///
    /// Unreadable files are logged, recorded as skipped, and never abort
    /// the run. Fails only when the directory itself cannot be scanned.
    pub fn load(root: &Path, config: &CorpusConfig) -> Result<Self> {
        let paths = scan_notes(root, config)?;
        Ok(Self::from_paths(paths, |_| {}))
    }

    /// Build a corpus from already-scanned paths.
    ///
    /// `progress` is invoked once per file, parsed or skipped.
    pub fn from_paths<F: FnMut(&Path)>(paths: Vec<PathBuf>, mut progress: F) -> Self {
        let mut notes = Vec::new();
        let mut skipped = Vec::new();

        for path in paths {
            progress(&path);
            match std::fs::read(&path) {
                Ok(raw) => match parser::parse_note(&path, &raw) {
                    Ok(note) => notes.push(note),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "skipping unparseable note");
                        skipped.push(SkippedFile {
                            path,
                            reason: err.message.clone(),
                        });
                    }
                },
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable note");
                    skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(notes = notes.len(), skipped = skipped.len(), "corpus loaded");

        Self { notes, skipped }
    }

    /// The set of all note titles, for exact-match resolution
    pub fn title_set(&self) -> BTreeSet<&str> {
        self.notes.iter().map(|n| n.title.as_str()).collect()
    }

    /// Find a note by exact title
    pub fn get(&self, title: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.title == title)
    }
}
