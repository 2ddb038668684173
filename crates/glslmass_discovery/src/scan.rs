//! Directory traversal.
//!
//! Each scan root is walked with [`walkdir`]; excluded entries are pruned in
//! `filter_entry`, so an excluded directory is never descended into.
//! Symlinks to files are classified through their target.

use std::path::{Path, PathBuf};

use glslmass_core::CompileContext;
use walkdir::{DirEntry, WalkDir};

use crate::classify::is_shader_source;
use crate::{DiscoveryError, Result};

/// Collects every shader source reachable under the context's roots.
///
/// The base directory is scanned first (unless exclusive include is set),
/// followed by each include path with its own recursion flag. The same file
/// may appear more than once when include paths overlap.
pub fn discover(ctx: &CompileContext) -> Result<Vec<PathBuf>> {
    let mut shaders = Vec::new();

    if ctx.exclusive_include() {
        log::debug!("Exclusive include set, skipping base directory");
    } else {
        scan_directory(ctx, ctx.base_dir(), ctx.recursive(), &mut shaders)?;
    }

    for include in ctx.includes() {
        scan_directory(ctx, &include.path, include.recursive, &mut shaders)?;
    }

    log::info!("Found {} shader source(s)", shaders.len());
    Ok(shaders)
}

/// Scans a single root and appends the shader sources found to `out`.
///
/// Without `recursive` only the root's direct children are classified.
pub fn scan_directory(
    ctx: &CompileContext,
    root: &Path,
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> Result<()> {
    if ctx.is_excluded(root) {
        log::debug!("Skipping excluded root {}", root.display());
        return Ok(());
    }

    log::info!(
        "Scanning {}{}",
        root.display(),
        if recursive { " (recursive)" } else { "" }
    );

    let max_depth = if recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let excluded = ctx.is_excluded(entry.path());
            if excluded {
                log::debug!("Excluded {}", entry.path().display());
            }
            !excluded
        });

    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source.path().unwrap_or(root).to_path_buf();
            DiscoveryError::ReadDir { path, source }
        })?;

        if !points_to_file(&entry) {
            continue;
        }

        if is_shader_source(entry.path()) {
            log::debug!("Shader source {}", entry.path().display());
            out.push(entry.into_path());
        }
    }

    Ok(())
}

/// Regular files, and symlinks whose target is a regular file. Symlinked
/// directories are not followed.
fn points_to_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
        return file_type.is_file();
    }

    match std::fs::metadata(entry.path()) {
        Ok(meta) if meta.is_file() => true,
        Ok(_) => {
            log::debug!("Not following symlinked directory {}", entry.path().display());
            false
        }
        Err(e) => {
            log::warn!("Dangling symlink {}: {}", entry.path().display(), e);
            false
        }
    }
}
