//! Reading document text line by line.
//!
//! Documents are read as raw bytes and decoded one line at a time, so a
//! stray invalid byte never aborts the whole read unless the caller asks for
//! [`DecodePolicy::Strict`].

use std::borrow::Cow;
use std::io::BufRead;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RankError, RankResult};

/// Byte-order mark, dropped from the start of a document.
pub(crate) const BOM: char = '\u{feff}';

/// What to do with bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DecodePolicy {
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
    /// Drop invalid sequences (default).
    #[default]
    Ignore,
    /// Fail the run on the first invalid sequence.
    Strict,
}

impl DecodePolicy {
    /// Returns the policy as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Ignore => "ignore",
            Self::Strict => "strict",
        }
    }
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode `bytes` under `policy`.
///
/// Returns `None` only for [`DecodePolicy::Strict`] when `bytes` is not
/// valid UTF-8.
pub fn decode(bytes: &[u8], policy: DecodePolicy) -> Option<Cow<'_, str>> {
    match policy {
        DecodePolicy::Replace => Some(String::from_utf8_lossy(bytes)),
        DecodePolicy::Strict => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
        DecodePolicy::Ignore => match std::str::from_utf8(bytes) {
            Ok(text) => Some(Cow::Borrowed(text)),
            Err(_) => Some(Cow::Owned(
                bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
            )),
        },
    }
}

/// Iterator over the decoded lines of a reader. See [`decoded_lines`].
#[derive(Debug)]
pub struct DecodedLines<R> {
    reader: R,
    policy: DecodePolicy,
    line: usize,
    buf: Vec<u8>,
}

/// Read `reader` line by line, decoding each line under `policy`.
///
/// Yielded lines keep their line terminator. A leading byte-order mark on
/// the first line is dropped. After the first error the iterator is fused.
pub const fn decoded_lines<R: BufRead>(reader: R, policy: DecodePolicy) -> DecodedLines<R> {
    DecodedLines {
        reader,
        policy,
        line: 0,
        buf: Vec::new(),
    }
}

impl<R: BufRead> DecodedLines<R> {
    fn fail(&mut self, err: RankError) -> Option<RankResult<String>> {
        self.line = usize::MAX;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = RankResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.line == usize::MAX {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                let first = self.line == 1;
                let decoded = decode(&self.buf, self.policy).map(|text| {
                    if first {
                        text.strip_prefix(BOM).unwrap_or(&*text).to_string()
                    } else {
                        text.into_owned()
                    }
                });
                match decoded {
                    Some(text) => Some(Ok(text)),
                    None => {
                        let line = self.line;
                        self.fail(RankError::DecodeAnomaly { line })
                    }
                }
            }
            Err(e) => self.fail(RankError::Read(e)),
        }
    }
}
