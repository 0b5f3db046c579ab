//! Error types for wordrank-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during a ranking run.
///
/// Every variant is terminal for the run that produced it. No partial
/// ranking is ever returned alongside an error.
#[derive(Error, Debug)]
pub enum RankError {
    /// The exclusion list or the document could not be opened.
    #[error("cannot read {path}: {source}")]
    ResourceMissing {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the document failed part-way through.
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),

    /// The document contains bytes that are not valid UTF-8.
    ///
    /// Only produced under [`DecodePolicy::Strict`](crate::DecodePolicy::Strict).
    #[error("undecodable bytes on line {line}")]
    DecodeAnomaly {
        /// 1-based line number of the first undecodable line.
        line: usize,
    },
}

/// Result type alias using [`RankError`].
pub type RankResult<T> = Result<T, RankError>;
