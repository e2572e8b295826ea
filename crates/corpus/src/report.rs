//! Corpus report generation
//!
//! One `CorpusReport` per run: summary counts, skipped files, unresolved
//! references, duplicate-title warnings, and the session index. Reports
//! carry no timestamps and keep stable orderings, so an unchanged corpus
//! produces byte-identical output.

use crate::indexer::SessionIndex;
use crate::note::{Corpus, SkippedFile};
use crate::plan::parse_plan;
use crate::resolver::{self, UnresolvedReference};
use notelint_core::Result;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Corpus-wide counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Notes successfully parsed
    pub notes: usize,
    /// Files skipped due to parse errors
    pub skipped: usize,
    /// Total section headings across the corpus
    pub headings: usize,
    /// Total fenced code blocks
    pub code_blocks: usize,
    /// Total cross-reference tokens emitted
    pub references: usize,
}

/// Full validation report for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Corpus-wide counts
    pub summary: Summary,
    /// Files that could not be parsed
    pub skipped: Vec<SkippedFile>,
    /// Note-level references with no matching title
    pub unresolved: Vec<UnresolvedReference>,
    /// Titles claimed by more than one note
    pub duplicate_titles: Vec<String>,
    /// Per-session material mapping
    pub sessions: SessionIndex,
}

impl CorpusReport {
    /// Run the resolve and index stages over a loaded corpus.
    ///
    /// `plan_file` is the file name of the plan document; when no note in
    /// the corpus matches it, the session index is empty.
    pub fn generate(corpus: &Corpus, plan_file: &str) -> Self {
        let titles = corpus.title_set();

        let unresolved = resolver::resolve_against(&corpus.notes, &titles);
        let duplicate_titles = resolver::duplicate_titles(&corpus.notes);

        let plan_note = corpus
            .notes
            .iter()
            .find(|n| n.path.file_name().and_then(|f| f.to_str()) == Some(plan_file));

        let sessions = match plan_note {
            Some(note) => SessionIndex::build(&parse_plan(&note.body), &titles),
            None => {
                tracing::debug!(plan_file, "no plan document in corpus");
                SessionIndex::missing_plan()
            }
        };

        let summary = Summary {
            notes: corpus.notes.len(),
            skipped: corpus.skipped.len(),
            headings: corpus.notes.iter().map(|n| n.headings.len()).sum(),
            code_blocks: corpus.notes.iter().map(|n| n.code_blocks).sum(),
            references: corpus.notes.iter().map(|n| n.references.len()).sum(),
        };

        Self {
            summary,
            skipped: corpus.skipped.clone(),
            unresolved,
            duplicate_titles,
            sessions,
        }
    }

    /// True iff any reference (note-level or session-level) is unresolved.
    ///
    /// Warnings (skipped files, duplicates, empty sessions) never count.
    pub fn has_errors(&self) -> bool {
        !self.unresolved.is_empty() || self.sessions.has_unresolved()
    }

    /// Export report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the report as plain-ish colored text
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "Corpus Report".bold()));
        out.push_str(&format!("{}\n\n", "=============".bold()));

        out.push_str(&format!(
            "Notes: {}   Headings: {}   Code blocks: {}   References: {}\n\n",
            self.summary.notes.to_string().cyan(),
            self.summary.headings,
            self.summary.code_blocks,
            self.summary.references,
        ));

        if !self.skipped.is_empty() {
            out.push_str(&format!("{}\n", "Skipped files:".bold()));
            for skip in &self.skipped {
                out.push_str(&format!(
                    "  {} {} ({})\n",
                    "⚠".yellow(),
                    skip.path.display(),
                    skip.reason
                ));
            }
            out.push('\n');
        }

        if !self.duplicate_titles.is_empty() {
            out.push_str(&format!("{}\n", "Duplicate titles:".bold()));
            for title in &self.duplicate_titles {
                out.push_str(&format!("  {} {}\n", "⚠".yellow(), title));
            }
            out.push('\n');
        }

        if self.sessions.plan_found {
            out.push_str(&format!("{}\n", "Sessions:".bold()));
            for session in &self.sessions.sessions {
                let duration = session
                    .duration
                    .as_deref()
                    .map(|d| format!(" ({})", d))
                    .unwrap_or_default();
                out.push_str(&format!("  {}{}\n", session.label.bold(), duration));
                for title in &session.resolved {
                    out.push_str(&format!("    {} {}\n", "✓".green(), title));
                }
                for title in &session.unresolved {
                    out.push_str(&format!("    {} {} (no such note)\n", "✗".red(), title));
                }
                if session.resolved.is_empty() {
                    out.push_str(&format!("    {} no material\n", "⚠".yellow()));
                }
            }
            out.push('\n');
        } else {
            out.push_str(&format!(
                "{} no plan document in this corpus\n\n",
                "⚠".yellow()
            ));
        }

        if self.unresolved.is_empty() {
            out.push_str(&format!("{}\n", "✓ All cross-references resolve".green().bold()));
        } else {
            out.push_str(&format!(
                "{}\n",
                format!("✗ {} unresolved reference(s):", self.unresolved.len())
                    .red()
                    .bold()
            ));
            for unresolved in &self.unresolved {
                out.push_str(&format!(
                    "  {} {} -> {}\n",
                    "•".red(),
                    unresolved.source,
                    unresolved.target
                ));
            }
        }

        out
    }

    /// Print the report to stdout
    pub fn print(&self) {
        print!("{}", self.render_text());
    }
}
