//! Words excluded from counting.
//!
//! The exclusion list is a single text file of comma-separated entries:
//!
//! ```text
//! the,a,an,and,
//! of,to,in
//! ```
//!
//! Entries are trimmed of surrounding whitespace and empty entries are
//! dropped. Case is kept as written; tokens are lowercased before they are
//! checked, so entries are normally written in lowercase.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::document::{DecodePolicy, decode};
use crate::error::{RankError, RankResult};

/// Separator between entries in an exclusion list file.
pub const SEPARATOR: char = ',';

/// Default exclusion list file name, looked up in the working directory.
pub const DEFAULT_FILE_NAME: &str = "words-to-avoid.txt";

/// Immutable set of excluded words.
///
/// Build one per process and share it by reference (or `Arc`) between runs;
/// nothing in the ranking pipeline mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    /// Parse the contents of an exclusion list.
    ///
    /// Entries are split on commas, then trimmed of surrounding whitespace
    /// rather than kept verbatim, and empty entries are dropped, so
    /// `"the, a,\n"` yields `the` and `a`. Case is kept as written; an entry
    /// only matches words spelled the same.
    pub fn parse(contents: &str) -> Self {
        contents
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    /// Load an exclusion list from `path`.
    ///
    /// Undecodable bytes are ignored. A missing or unreadable file is
    /// [`RankError::ResourceMissing`].
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> RankResult<Self> {
        let bytes = std::fs::read(path.as_std_path()).map_err(|source| {
            RankError::ResourceMissing {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let contents = decode(&bytes, DecodePolicy::Ignore).unwrap_or_default();
        let set = Self::parse(&contents);
        tracing::debug!(entries = set.len(), "exclusion list loaded");
        Ok(set)
    }

    /// Whether `word` is excluded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
