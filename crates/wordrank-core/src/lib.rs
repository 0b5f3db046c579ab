//! Core library for wordrank.
//!
//! Counts the words of an English text document and ranks the most frequent
//! ones, leaving out punctuation, digits, and a list of excluded words.
//!
//! # Modules
//!
//! - [`tokenizer`] - line normalization and word extraction
//! - [`validator`] - which words are counted
//! - [`bag`] - the multiset the words are counted in
//! - [`ranker`] - top-K ranked entries
//! - [`pipeline`] - one call per document, wiring the above together
//! - [`exclusion`] - the exclusion list
//! - [`document`] - line-by-line decoding of document bytes
//! - [`config`] - configuration loading and management
//! - [`error`] - error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordrank_core::{ExclusionSet, rank_text};
//!
//! let exclusions = ExclusionSet::parse("the,on");
//! let report = rank_text("The cat sat on the mat. The cat slept.", &exclusions, 2);
//!
//! assert_eq!(report.entries[0].word, "cat");
//! assert_eq!(report.entries[0].count, 2);
//! ```
#![deny(unsafe_code)]

pub mod bag;
pub mod config;
pub mod document;
pub mod error;
pub mod exclusion;
pub mod pipeline;
pub mod ranker;
pub mod tokenizer;
pub mod validator;

pub use bag::Bag;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use document::DecodePolicy;
pub use error::{ConfigError, ConfigResult, RankError, RankResult};
pub use exclusion::ExclusionSet;
pub use pipeline::{FrequencyReport, rank_file, rank_lines, rank_reader, rank_text};
pub use ranker::{DEFAULT_TOP_K, RankedEntry};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
