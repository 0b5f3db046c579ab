//! Turning an ordered bag into numbered results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of words reported when no limit is configured.
pub const DEFAULT_TOP_K: usize = 50;

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankedEntry {
    /// 1-based position after ordering.
    pub rank: usize,
    /// Number of occurrences in the document.
    pub count: usize,
    /// The normalized word.
    pub word: String,
}

/// Take the first `top_k` pairs of an ordered `(count, word)` sequence and
/// number them from 1.
///
/// The input must already be ordered (see
/// [`Bag::ordered`](crate::bag::Bag::ordered)); it is not re-sorted here.
/// Shorter inputs are returned whole, and `top_k == 0` yields nothing.
pub fn rank<I>(ordered: I, top_k: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (usize, String)>,
{
    ordered
        .into_iter()
        .take(top_k)
        .zip(1..)
        .map(|((count, word), rank)| RankedEntry { rank, count, word })
        .collect()
}
