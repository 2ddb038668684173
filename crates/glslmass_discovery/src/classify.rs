//! Shader source classification by content.
//!
//! File extensions are not trusted; a file is GLSL if any line, once
//! trimmed, opens with the `#version` directive.

use std::path::Path;

pub const VERSION_DIRECTIVE: &str = "#version";

#[must_use]
pub fn contains_version_directive(text: &str) -> bool {
    text.lines().any(|line| line.trim().starts_with(VERSION_DIRECTIVE))
}

/// Reads `path` and checks it for a version directive.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so
/// binary files simply fail to match.
pub fn classify(path: &Path) -> std::io::Result<bool> {
    let bytes = std::fs::read(path)?;
    Ok(contains_version_directive(&String::from_utf8_lossy(&bytes)))
}

/// Like [`classify`], but an unreadable file is logged and counted as not a
/// shader.
#[must_use]
pub fn is_shader_source(path: &Path) -> bool {
    match classify(path) {
        Ok(is_shader) => is_shader,
        Err(e) => {
            log::warn!("Error opening file {}: {}", path.display(), e);
            false
        }
    }
}
