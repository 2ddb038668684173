//! Compile Context
//!
//! [`CompileContext`] is the read-only description of one run: where to
//! look for shaders, what to skip, and whether the timestamp cache is
//! honoured. It is assembled once through [`CompileContextBuilder`] and then
//! shared by reference with discovery and the build driver.
//!
//! All stored paths are absolute. Relative paths given to the builder are
//! resolved against the current working directory and cleaned of `.` and
//! `..` lexically, so that the exclusion check can compare traversal paths
//! by plain equality.

use std::path::{Component, Path, PathBuf};

use crate::errors::{ConfigError, Result};

/// A directory to include in or exclude from the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    pub path: PathBuf,
    /// Recursion flag for this path, independent of the global one.
    pub recursive: bool,
}

impl SearchPath {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }
}

/// Immutable settings shared by discovery and the build driver.
#[derive(Debug, Clone)]
pub struct CompileContext {
    recursive: bool,
    exclusive_include: bool,
    force: bool,
    excludes: Vec<SearchPath>,
    includes: Vec<SearchPath>,
    base_dir: PathBuf,
}

impl CompileContext {
    #[must_use]
    pub fn builder() -> CompileContextBuilder {
        CompileContextBuilder::default()
    }

    /// Whether the base directory scan descends into subdirectories.
    #[inline]
    #[must_use]
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// When set, the base directory is not scanned at all.
    #[inline]
    #[must_use]
    pub fn exclusive_include(&self) -> bool {
        self.exclusive_include
    }

    /// When set, the staleness check is bypassed and everything compiles.
    #[inline]
    #[must_use]
    pub fn force(&self) -> bool {
        self.force
    }

    #[inline]
    #[must_use]
    pub fn excludes(&self) -> &[SearchPath] {
        &self.excludes
    }

    #[inline]
    #[must_use]
    pub fn includes(&self) -> &[SearchPath] {
        &self.includes
    }

    #[inline]
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Exact match against the exclude list. `shaders/old` excludes that
    /// directory only, never `shaders/old_v2` or `shaders`.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|exclude| exclude.path == path)
    }
}

/// Collects settings while arguments are parsed, then freezes them into a
/// [`CompileContext`].
#[derive(Debug, Clone, Default)]
pub struct CompileContextBuilder {
    recursive: bool,
    exclusive_include: bool,
    force: bool,
    excludes: Vec<SearchPath>,
    includes: Vec<SearchPath>,
    base_dir: Option<PathBuf>,
}

impl CompileContextBuilder {
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn exclusive_include(mut self, exclusive: bool) -> Self {
        self.exclusive_include = exclusive;
        self
    }

    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn exclude(mut self, path: SearchPath) -> Self {
        self.excludes.push(path);
        self
    }

    #[must_use]
    pub fn include(mut self, path: SearchPath) -> Self {
        self.includes.push(path);
        self
    }

    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn has_base_dir(&self) -> bool {
        self.base_dir.is_some()
    }

    /// Resolves the base directory (working directory when unset) and makes
    /// every path absolute.
    pub fn build(self) -> Result<CompileContext> {
        let base_dir = match self.base_dir {
            Some(dir) => absolutize(dir)?,
            None => std::env::current_dir().map_err(ConfigError::WorkingDirectory)?,
        };

        let resolve_all = |paths: Vec<SearchPath>| -> Result<Vec<SearchPath>> {
            paths
                .into_iter()
                .map(|sp| Ok(SearchPath::new(absolutize(sp.path)?, sp.recursive)))
                .collect()
        };

        Ok(CompileContext {
            recursive: self.recursive,
            exclusive_include: self.exclusive_include,
            force: self.force,
            excludes: resolve_all(self.excludes)?,
            includes: resolve_all(self.includes)?,
            base_dir,
        })
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    let absolute = std::path::absolute(&path)
        .map_err(|source| ConfigError::ResolvePath { path, source })?;
    Ok(clean(&absolute))
}

/// Lexically drops `.` and folds `..` into the preceding component, without
/// touching the filesystem. `..` at the root stays at the root.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
