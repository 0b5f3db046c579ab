//! Line normalization and word extraction.
//!
//! Each line is cleaned in three steps:
//!
//! 1. Brackets, sentence punctuation, underscores, em-dashes, digits, the
//!    replacement character U+FFFD and the literal `-tm` become spaces.
//! 2. The line is split on whitespace.
//! 3. Each piece loses any leading/trailing quote and symbol characters and
//!    is lowercased.
//!
//! Pieces that end up empty are still yielded; deciding what counts is the
//! [`validator`](crate::validator)'s job.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

/// Characters replaced by a space before splitting.
pub const SEPARATOR_CHARS: &[char] = &[
    '(', '[', '{', ')', ']', '}', '.', ',', ';', ':', '_', '\u{2014}', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9', '\u{fffd}',
];

/// Literal sequence replaced by a space before splitting (case-sensitive).
pub const SEPARATOR_SEQUENCE: &str = "-tm";

/// Characters trimmed from both ends of every word.
pub const STRIP_CHARS: &[char] = &['\'', '"', '!', '?', '+', '-', '*', '/', '#'];

/// One automaton for every separator. None of the patterns overlap, so a
/// single left-to-right pass gives the same result as replacing them one
/// after another.
static SEPARATORS: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let mut patterns: Vec<String> = SEPARATOR_CHARS.iter().map(char::to_string).collect();
    patterns.push(SEPARATOR_SEQUENCE.to_string());
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(&patterns)
        .expect("valid separator patterns")
});

/// Replace separators in `line` with single spaces.
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    SEPARATORS.replace_all_with(line, &mut out, |_, _, dst| {
        dst.push(' ');
        true
    });
    out
}

/// Strip quote/symbol characters from both ends of `raw`, then lowercase it.
///
/// May return an empty string.
pub fn clean_token(raw: &str) -> String {
    raw.trim_matches(STRIP_CHARS).to_lowercase()
}

/// Normalized words of a single line, left to right.
pub fn tokenize_line(line: &str) -> std::vec::IntoIter<String> {
    normalize_line(line)
        .split_whitespace()
        .map(clean_token)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Lazily tokenize a sequence of lines.
///
/// Only one line's words are held at a time, so arbitrarily long inputs can
/// be streamed through.
pub fn tokenize<I>(lines: I) -> Tokens<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Tokens {
        lines: lines.into_iter(),
        current: Vec::new().into_iter(),
    }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug)]
pub struct Tokens<I> {
    lines: I,
    current: std::vec::IntoIter<String>,
}

impl<I> Iterator for Tokens<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(token) = self.current.next() {
                return Some(token);
            }
            let line = self.lines.next()?;
            self.current = tokenize_line(line.as_ref());
        }
    }
}
