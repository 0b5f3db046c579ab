//! Counting and ranking the words of one document.
//!
//! Every entry point runs the same stages: tokenize line by line, keep the
//! tokens the [`validator`](crate::validator) accepts, count them in a fresh
//! [`Bag`], then order the bag and cut it down to the top `top_k` words.
//!
//! Nothing is kept between calls. The [`ExclusionSet`] is borrowed and never
//! modified, so one set can serve any number of runs. If reading fails, the
//! partially filled bag is dropped and only the error is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bag::Bag;
use crate::document::{BOM, DecodePolicy, decoded_lines};
use crate::error::{RankError, RankResult};
use crate::exclusion::ExclusionSet;
use crate::ranker::{RankedEntry, rank};
use crate::tokenizer::{tokenize, tokenize_line};
use crate::validator::Validator;

/// Result of ranking one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyReport {
    /// Number of counted words, repeats included.
    pub total_words: usize,
    /// Number of distinct counted words.
    pub distinct_words: usize,
    /// Requested number of entries.
    pub top_k: usize,
    /// The most frequent words, most frequent first.
    pub entries: Vec<RankedEntry>,
}

impl FrequencyReport {
    /// Whether no word was counted at all.
    pub const fn is_empty(&self) -> bool {
        self.total_words == 0
    }
}

/// Rank the words of already-decoded lines.
#[tracing::instrument(skip_all, fields(exclusions = exclusions.len(), top_k = top_k))]
pub fn rank_lines<I>(lines: I, exclusions: &ExclusionSet, top_k: usize) -> FrequencyReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let validator = Validator::new(exclusions);
    let bag: Bag<String> = tokenize(lines)
        .filter(|token| validator.accepts(token))
        .collect();
    finish(bag, top_k)
}

/// Rank the words of an in-memory document.
///
/// A leading byte-order mark is dropped, as [`rank_reader`] does.
pub fn rank_text(text: &str, exclusions: &ExclusionSet, top_k: usize) -> FrequencyReport {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    rank_lines(text.lines(), exclusions, top_k)
}

/// Rank the words read from `reader`, decoding each line under `decode`.
///
/// The document is streamed; only the current line and the counts are held
/// in memory.
#[tracing::instrument(skip_all, fields(exclusions = exclusions.len(), top_k = top_k, decode = %decode))]
pub fn rank_reader<R: BufRead>(
    reader: R,
    exclusions: &ExclusionSet,
    top_k: usize,
    decode: DecodePolicy,
) -> RankResult<FrequencyReport> {
    let validator = Validator::new(exclusions);
    let mut bag = Bag::new();

    tracing::debug!("collecting words");
    for line in decoded_lines(reader, decode) {
        let line = line?;
        bag.extend(tokenize_line(&line).filter(|token| validator.accepts(token)));
    }

    Ok(finish(bag, top_k))
}

/// Rank the words of the document at `path`.
///
/// A missing or unreadable file is [`RankError::ResourceMissing`].
#[tracing::instrument(skip(exclusions), fields(exclusions = exclusions.len()))]
pub fn rank_file(
    path: &Utf8Path,
    exclusions: &ExclusionSet,
    top_k: usize,
    decode: DecodePolicy,
) -> RankResult<FrequencyReport> {
    let file = File::open(path.as_std_path()).map_err(|source| RankError::ResourceMissing {
        path: path.to_path_buf(),
        source,
    })?;
    rank_reader(BufReader::new(file), exclusions, top_k, decode)
}

fn finish(bag: Bag<String>, top_k: usize) -> FrequencyReport {
    let total_words = bag.size();
    let distinct_words = bag.distinct();
    tracing::debug!(total_words, distinct_words, "sorting words by decreasing frequency");

    let entries = rank(bag.into_ordered(), top_k);
    tracing::info!(
        total_words,
        distinct_words,
        reported = entries.len(),
        "ranking complete"
    );

    FrequencyReport {
        total_words,
        distinct_words,
        top_k,
        entries,
    }
}
