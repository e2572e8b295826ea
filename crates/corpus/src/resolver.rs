//! Cross-reference resolution
//!
//! Exact, case-sensitive title matching only. The title set is built once
//! per run and passed explicitly; there is no global registry.

use crate::note::Note;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A cross-reference that does not match any note title
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnresolvedReference {
    /// Title of the note emitting the reference
    pub source: String,
    /// The missing target title
    pub target: String,
}

/// Build the set of all note titles
pub fn title_set(notes: &[Note]) -> BTreeSet<&str> {
    notes.iter().map(|n| n.title.as_str()).collect()
}

/// Check every note's references against the title set.
///
/// Returns one entry per distinct (source, target) pair, sorted, so the
/// report is stable across runs.
pub fn resolve(notes: &[Note]) -> Vec<UnresolvedReference> {
    let titles = title_set(notes);
    resolve_against(notes, &titles)
}

/// Resolve with an explicitly supplied title set
pub fn resolve_against(notes: &[Note], titles: &BTreeSet<&str>) -> Vec<UnresolvedReference> {
    let mut unresolved = BTreeSet::new();

    for note in notes {
        for target in &note.references {
            if !titles.contains(target.as_str()) {
                unresolved.insert(UnresolvedReference {
                    source: note.title.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    unresolved.into_iter().collect()
}

/// Titles claimed by more than one note.
///
/// Duplicates make "matches exactly one note" ambiguous; they are reported
/// as warnings, and references to them still resolve.
pub fn duplicate_titles(notes: &[Note]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for note in notes {
        *counts.entry(note.title.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(title, _)| title.to_string())
        .collect()
}
