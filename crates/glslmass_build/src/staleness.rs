//! Timestamp-based staleness check.
//!
//! The only incremental state is the pair of modification times of a source
//! and its artifact, compared at whole-second resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Appends `suffix` to the full source path, keeping its extension:
/// `shader.vert` becomes `shader.vert.spv`.
#[must_use]
pub fn output_path_for(source: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Modification time in seconds since the Unix epoch, or `None` if it
/// cannot be determined.
#[must_use]
pub fn modified_secs(path: &Path) -> Option<u64> {
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| log::warn!("Cannot read modification time of {}: {}", path.display(), e))
        .ok()?;
    modified
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|since| since.as_secs())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Cache bypassed by the force flag.
    Forced,
    /// No artifact exists yet.
    Missing,
    /// The artifact is not strictly newer than the source, or a timestamp
    /// could not be read.
    Outdated,
    /// The source is strictly older than its artifact.
    UpToDate,
}

impl Staleness {
    #[inline]
    #[must_use]
    pub fn needs_compile(self) -> bool {
        self != Self::UpToDate
    }
}

/// Decides whether `source` must be recompiled into `output`.
///
/// Equal timestamps count as outdated: within the same second there is no
/// way to tell which file was written last.
#[must_use]
pub fn check(source: &Path, output: &Path, force: bool) -> Staleness {
    if force {
        return Staleness::Forced;
    }
    if !output.exists() {
        return Staleness::Missing;
    }
    match (modified_secs(source), modified_secs(output)) {
        (Some(src), Some(out)) if src < out => Staleness::UpToDate,
        _ => Staleness::Outdated,
    }
}
