//! Core utilities for the notelint curriculum tools
//!
//! This crate provides shared functionality used across the notelint workspace:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults
//! - **File scanning**: note discovery with extension and glob filtering
//!
//! # Example
//!
//! ```rust,no_run
//! use notelint_core::{config::Config, file_scanner::scan_notes};
//! use std::path::Path;
//!
//! let config = Config::load(None).expect("config");
//! let notes = scan_notes(Path::new("notes/"), &config.schema.corpus)
//!     .expect("Failed to scan corpus");
//! println!("{} notes found", notes.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod file_scanner;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::file_scanner::{scan_notes, FileScanner};
}
