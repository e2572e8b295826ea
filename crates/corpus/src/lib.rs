//! Note parsing, reference resolution, and session indexing
//!
//! The pipeline is a synchronous batch over immutable stages:
//! scan → parse ([`parser`]) → resolve ([`resolver`]) → index
//! ([`indexer`]) → report ([`report`]). Each stage consumes the previous
//! stage's output; nothing is shared or mutated across stages.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod indexer;
pub mod note;
pub mod parser;
pub mod plan;
pub mod report;
pub mod resolver;

pub use indexer::{SessionIndex, SessionMaterial};
pub use note::{Corpus, Heading, Note, SkippedFile};
pub use plan::Session;
pub use report::{CorpusReport, Summary};
pub use resolver::UnresolvedReference;
