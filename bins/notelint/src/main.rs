//! Notelint - curriculum corpus linter and indexer
//!
//! Parses a directory of Markdown study notes, validates `[[wiki-link]]`
//! cross-references, and maps the training plan's sessions to their
//! material notes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use notelint_cli::output::{format_count, Status};
use notelint_cli::progress;
use notelint_core::config::Config;
use notelint_core::error::exit_codes;
use notelint_core::file_scanner::scan_notes;
use notelint_core::Error;
use notelint_corpus::{Corpus, CorpusReport};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "notelint")]
#[command(about = "Lint and index a Markdown curriculum corpus")]
#[command(version)]
#[command(author)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate cross-references and index the plan's sessions
    Check {
        /// Corpus directory containing the Markdown notes
        dir: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a table of contents for the corpus
    Toc {
        /// Corpus directory containing the Markdown notes
        dir: PathBuf,
    },

    /// Print the per-session material mapping
    Sessions {
        /// Corpus directory containing the Markdown notes
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(config = ?config.path, "configuration loaded");

    match cli.command {
        Commands::Check { dir, output } => {
            cmd_check(&dir, &config, &cli.format, output.as_deref())?
        }
        Commands::Toc { dir } => cmd_toc(&dir, &config, &cli.format)?,
        Commands::Sessions { dir } => cmd_sessions(&dir, &config, &cli.format)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    Ok(())
}

fn load_corpus(dir: &Path, config: &Config) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(Error::directory_not_found(dir).into());
    }

    let paths = scan_notes(dir, &config.schema.corpus)?;
    if paths.is_empty() {
        return Err(Error::empty_corpus(dir).into());
    }

    let pb = progress::file_progress(paths.len() as u64);
    let corpus = Corpus::from_paths(paths, |_| pb.inc(1));
    progress::finish_success(&pb, &format_count(corpus.notes.len(), "note parsed", "notes parsed"));

    Ok(corpus)
}

fn cmd_check(dir: &Path, config: &Config, format: &str, output: Option<&Path>) -> Result<()> {
    let corpus = load_corpus(dir, config)?;
    let report = CorpusReport::generate(&corpus, &config.schema.plan.file);

    let rendered = if format == "json" {
        report.to_json()?
    } else {
        report.render_text()
    };

    match output {
        Some(path) => std::fs::write(path, &rendered)?,
        None => print!("{}", rendered),
    }

    if report.has_errors() {
        std::process::exit(exit_codes::LINT_FAILURE);
    }

    Ok(())
}

fn cmd_toc(dir: &Path, config: &Config, format: &str) -> Result<()> {
    let corpus = load_corpus(dir, config)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&corpus.notes)?);
        return Ok(());
    }

    Status::header("Table of Contents");
    println!();

    for note in &corpus.notes {
        println!(
            "{} {}",
            note.title.cyan().bold(),
            format!(
                "({}, {})",
                note.path.display(),
                format_count(note.code_blocks, "code block", "code blocks")
            )
            .dimmed()
        );
        // The first heading usually is the title; don't repeat it
        let skip = usize::from(
            note.headings
                .first()
                .map(|h| h.text == note.title)
                .unwrap_or(false),
        );
        for heading in note.headings.iter().skip(skip) {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            println!("{}{}", indent, heading.text);
        }
    }
    println!();

    Ok(())
}

fn cmd_sessions(dir: &Path, config: &Config, format: &str) -> Result<()> {
    let corpus = load_corpus(dir, config)?;
    let report = CorpusReport::generate(&corpus, &config.schema.plan.file);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report.sessions)?);
        return Ok(());
    }

    Status::header("Session Material");
    println!();

    if !report.sessions.plan_found {
        Status::warning(&format!(
            "no plan document ({}) in this corpus",
            config.schema.plan.file
        ));
        return Ok(());
    }

    for session in &report.sessions.sessions {
        let duration = session
            .duration
            .as_deref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        println!("{}{}", session.label.bold(), duration);
        for title in &session.resolved {
            println!("  {} {}", "✓".green(), title);
        }
        for title in &session.unresolved {
            println!("  {} {} (no such note)", "✗".red(), title);
        }
        if session.resolved.is_empty() {
            println!("  {} no material", "⚠".yellow());
        }
        println!();
    }

    Ok(())
}
