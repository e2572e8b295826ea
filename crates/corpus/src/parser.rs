//! Single-note Markdown parsing
//!
//! Extracts the structure the linter cares about: headings, fenced code
//! blocks, and `[[wiki-style]]` cross-reference tokens. Tolerant by
//! design: unexpected structure never fails a parse, only undecodable
//! bytes do.

use crate::note::{Heading, Note};
use notelint_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+?)\s*$").unwrap());

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(```|~~~)").unwrap());

static WIKI_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").unwrap());

/// Parse one note from raw bytes.
///
/// The only failure mode is undecodable input; everything else degrades
/// gracefully (missing headings fall back to the file stem).
pub fn parse_note(path: &Path, raw: &[u8]) -> Result<Note> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| Error::undecodable_note(path).with_source(e))?;

    Ok(parse_text(path, text))
}

/// Parse already-decoded note text
pub fn parse_text(path: &Path, text: &str) -> Note {
    let mut headings = Vec::new();
    let mut references = Vec::new();
    let mut code_blocks = 0usize;
    let mut in_fence = false;

    for line in text.lines() {
        if FENCE.is_match(line) {
            if in_fence {
                in_fence = false;
            } else {
                in_fence = true;
                code_blocks += 1;
            }
            continue;
        }

        if in_fence {
            // Swift snippets are full of `[[Int]]`-style array literals;
            // nothing inside a fence counts as structure.
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            headings.push(Heading {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
            });
        }

        references.extend(wiki_links(line));
    }

    let title = headings
        .first()
        .map(|h| h.text.clone())
        .unwrap_or_else(|| file_stem(path));

    Note {
        title,
        path: path.to_path_buf(),
        headings,
        references,
        code_blocks,
        body: text.to_string(),
    }
}

/// Extract cross-reference targets from a single line.
///
/// `[[Title|label]]` and `[[Title#Anchor]]` both resolve against `Title`.
pub fn wiki_links(line: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(line)
        .filter_map(|caps| {
            let inner = caps[1].to_string();
            let target = inner
                .split('|')
                .next()
                .unwrap_or("")
                .split('#')
                .next()
                .unwrap_or("")
                .trim();
            if target.is_empty() {
                None
            } else {
                Some(target.to_string())
            }
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Note {
        parse_text(&PathBuf::from("Notes/Fixture.md"), text)
    }

    #[test]
    fn test_title_from_first_heading() {
        let note = parse("# Optionals\n\nSome prose.\n");
        assert_eq!(note.title, "Optionals");
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let note = parse("no headings here, just prose\n");
        assert_eq!(note.title, "Fixture");
    }

    #[test]
    fn test_headings_in_order() {
        let note = parse("# Top\n\n## Syntax\n\n### Force Unwrap\n");
        let texts: Vec<&str> = note.headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Top", "Syntax", "Force Unwrap"]);
        assert_eq!(note.headings[2].level, 3);
    }

    #[test]
    fn test_wiki_links_extracted() {
        let note = parse("See [[Optionals]] and [[Error Handling]].\n");
        assert_eq!(note.references, vec!["Optionals", "Error Handling"]);
    }

    #[test]
    fn test_wiki_link_alias_and_anchor_stripped() {
        let links = wiki_links("read [[Optionals|the optionals note]] then [[OOP#Inheritance]]");
        assert_eq!(links, vec!["Optionals", "OOP"]);
    }

    #[test]
    fn test_links_inside_fences_ignored() {
        let note = parse("# Arrays\n\n```swift\nlet grid: [[Int]] = []\n```\n\nSee [[Optionals]].\n");
        assert_eq!(note.references, vec!["Optionals"]);
        assert_eq!(note.code_blocks, 1);
    }

    #[test]
    fn test_code_block_count() {
        let note = parse("```swift\nlet x = 1\n```\n\ntext\n\n~~~\nobjc\n~~~\n");
        assert_eq!(note.code_blocks, 2);
    }

    #[test]
    fn test_unclosed_fence_tolerated() {
        let note = parse("# Title\n\n```swift\nlet x = [[Int]]()\n");
        assert_eq!(note.code_blocks, 1);
        assert!(note.references.is_empty());
    }

    #[test]
    fn test_empty_link_token_ignored() {
        let links = wiki_links("broken [[]] and [[ | ]] tokens");
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_note_rejects_invalid_utf8() {
        let err = parse_note(&PathBuf::from("Bad.md"), &[0xFF, 0xFE, 0x41]).unwrap_err();
        assert_eq!(err.code, notelint_core::ErrorCode::UndecodableNote);
    }
}
