//! Command implementations.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use wordrank_core::{Config, ConfigSources, ExclusionSet};

pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod top;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Open a document for reading, validating its size against the configured limit.
///
/// `-` opens standard input, which is streamed and not size-checked.
pub fn open_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Box<dyn BufRead>> {
    if path.as_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    // Preflight: check file size via metadata before reading.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let file = File::open(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Load the exclusion list, preferring `override_path` (relative to `cwd`)
/// over the configured one.
pub fn load_exclusions(
    override_path: Option<&Utf8Path>,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<ExclusionSet> {
    let path: Utf8PathBuf = match override_path {
        Some(path) => cwd.join(path),
        None => config.exclusions_path(sources, cwd),
    };
    let exclusions =
        ExclusionSet::load(&path).with_context(|| format!("failed to load exclusion list {path}"))?;
    tracing::debug!(path = %path, entries = exclusions.len(), "exclusion list ready");
    Ok(exclusions)
}
