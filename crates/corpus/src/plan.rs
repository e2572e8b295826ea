//! Curriculum plan parsing
//!
//! The plan document lists training sessions ("Session 1", "Session 2",
//! ...) as headings or list items, each optionally carrying a duration in
//! parentheses and referencing its material notes via wiki links. The
//! syntax is best-effort: lines that do not look like session entries are
//! simply attributed to the current session, or ignored before the first
//! one.

use crate::parser::wiki_links;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SESSION_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:#{1,6}\s+|[-*+]\s+|\d+[.)]\s+)?session\s+(\d+)\b(.*)$").unwrap()
});

static DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]+)\)").unwrap());

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(```|~~~)").unwrap());

/// One ordered entry from the curriculum plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session number as written in the plan
    pub number: u32,
    /// Display label, e.g. "Session 3"
    pub label: String,
    /// Duration text from the entry, e.g. "2h" or "90 min"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Note titles referenced by this session, in plan order
    pub references: Vec<String>,
}

/// Parse the plan document body into ordered sessions.
///
/// Links on a session's own line and on following lines belong to that
/// session, up to the next session entry. Fenced code blocks are skipped.
pub fn parse_plan(body: &str) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        if FENCE.is_match(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(caps) = SESSION_ENTRY.captures(line) {
            let number: u32 = caps[1].parse().unwrap_or(0);
            let rest = &caps[2];
            let duration = DURATION
                .captures(rest)
                .map(|d| d[1].trim().to_string())
                .filter(|d| !d.is_empty());

            sessions.push(Session {
                number,
                label: format!("Session {}", number),
                duration,
                references: wiki_links(rest),
            });
        } else if let Some(current) = sessions.last_mut() {
            current.references.extend(wiki_links(line));
        }
    }

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "\
# Plan for iOS

## Session 1 (2h)

- [[Swift Basics]]
- [[Optionals]]

## Session 2 (90 min)

Material: [[Error Handling|errors]]

## Session 3

No material yet.
";

    #[test]
    fn test_sessions_in_order() {
        let sessions = parse_plan(PLAN);
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].label, "Session 1");
        assert_eq!(sessions[2].number, 3);
    }

    #[test]
    fn test_duration_parsed() {
        let sessions = parse_plan(PLAN);
        assert_eq!(sessions[0].duration.as_deref(), Some("2h"));
        assert_eq!(sessions[1].duration.as_deref(), Some("90 min"));
        assert!(sessions[2].duration.is_none());
    }

    #[test]
    fn test_references_attach_to_current_session() {
        let sessions = parse_plan(PLAN);
        assert_eq!(sessions[0].references, vec!["Swift Basics", "Optionals"]);
        assert_eq!(sessions[1].references, vec!["Error Handling"]);
        assert!(sessions[2].references.is_empty());
    }

    #[test]
    fn test_list_item_session_entries() {
        let plan = "- Session 1 (1h): [[Optionals]]\n- Session 2: [[OOP]]\n";
        let sessions = parse_plan(plan);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].references, vec!["Optionals"]);
        assert_eq!(sessions[1].references, vec!["OOP"]);
    }

    #[test]
    fn test_links_before_first_session_ignored() {
        let plan = "Intro: [[Overview]]\n\n## Session 1\n\n[[Optionals]]\n";
        let sessions = parse_plan(plan);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].references, vec!["Optionals"]);
    }

    #[test]
    fn test_empty_plan() {
        assert!(parse_plan("").is_empty());
        assert!(parse_plan("# Just a title\n").is_empty());
    }
}
