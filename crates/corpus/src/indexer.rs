//! Session indexing
//!
//! Maps the curriculum plan's sessions to the notes they reference. Pure
//! report generation; a session with no resolvable material is a warning,
//! never an error, since the plan may legitimately schedule sessions with
//! no written notes yet.

use crate::plan::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One session with its references split into resolved and unresolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMaterial {
    /// Display label, e.g. "Session 3"
    pub label: String,
    /// Duration text from the plan entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Referenced titles that exist in the corpus, in plan order
    pub resolved: Vec<String>,
    /// Referenced titles with no matching note, in plan order
    pub unresolved: Vec<String>,
}

/// The per-session material mapping for the whole plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionIndex {
    /// Whether the plan document was found in the corpus
    pub plan_found: bool,
    /// Sessions in plan order
    pub sessions: Vec<SessionMaterial>,
    /// Labels of sessions with zero resolvable notes
    pub empty_sessions: Vec<String>,
}

impl SessionIndex {
    /// Index plan sessions against the corpus title set
    pub fn build(sessions: &[Session], titles: &BTreeSet<&str>) -> Self {
        let mut indexed = Vec::new();
        let mut empty_sessions = Vec::new();

        for session in sessions {
            let mut resolved = Vec::new();
            let mut unresolved = Vec::new();
            let mut seen = BTreeSet::new();

            for target in &session.references {
                if !seen.insert(target.as_str()) {
                    continue;
                }
                if titles.contains(target.as_str()) {
                    resolved.push(target.clone());
                } else {
                    unresolved.push(target.clone());
                }
            }

            if resolved.is_empty() {
                empty_sessions.push(session.label.clone());
            }

            indexed.push(SessionMaterial {
                label: session.label.clone(),
                duration: session.duration.clone(),
                resolved,
                unresolved,
            });
        }

        Self {
            plan_found: true,
            sessions: indexed,
            empty_sessions,
        }
    }

    /// The index used when no plan document exists
    pub fn missing_plan() -> Self {
        Self::default()
    }

    /// True when any session references a nonexistent note
    pub fn has_unresolved(&self) -> bool {
        self.sessions.iter().any(|s| !s.unresolved.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(number: u32, references: &[&str]) -> Session {
        Session {
            number,
            label: format!("Session {}", number),
            duration: None,
            references: references.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn titles<'a>(names: &[&'a str]) -> BTreeSet<&'a str> {
        names.iter().copied().collect()
    }

    #[test]
    fn test_resolved_material_in_plan_order() {
        let sessions = vec![session(1, &["Optionals", "OOP"])];
        let index = SessionIndex::build(&sessions, &titles(&["OOP", "Optionals"]));

        assert!(index.plan_found);
        assert_eq!(index.sessions[0].resolved, vec!["Optionals", "OOP"]);
        assert!(index.sessions[0].unresolved.is_empty());
        assert!(index.empty_sessions.is_empty());
    }

    #[test]
    fn test_session_with_missing_note_is_unresolved() {
        let sessions = vec![session(1, &["NotThere"])];
        let index = SessionIndex::build(&sessions, &titles(&["Optionals"]));

        assert_eq!(index.sessions[0].unresolved, vec!["NotThere"]);
        assert!(index.has_unresolved());
        // Zero resolvable notes also makes it an empty session
        assert_eq!(index.empty_sessions, vec!["Session 1"]);
    }

    #[test]
    fn test_session_without_references_is_warning_only() {
        let sessions = vec![session(1, &[])];
        let index = SessionIndex::build(&sessions, &titles(&["Optionals"]));

        assert_eq!(index.empty_sessions, vec!["Session 1"]);
        assert!(!index.has_unresolved());
    }

    #[test]
    fn test_repeated_reference_counted_once() {
        let sessions = vec![session(2, &["Optionals", "Optionals"])];
        let index = SessionIndex::build(&sessions, &titles(&["Optionals"]));

        assert_eq!(index.sessions[0].resolved, vec!["Optionals"]);
    }

    #[test]
    fn test_missing_plan_index() {
        let index = SessionIndex::missing_plan();
        assert!(!index.plan_found);
        assert!(index.sessions.is_empty());
        assert!(!index.has_unresolved());
    }
}
