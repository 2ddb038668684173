//! # glslmass_discovery
//!
//! Finds GLSL sources under the directories described by a
//! [`CompileContext`](glslmass_core::CompileContext).
//!
//! ```rust,ignore
//! use glslmass_core::CompileContext;
//!
//! let ctx = CompileContext::builder().base_dir("shaders").recursive(true).build()?;
//! for shader in glslmass_discovery::discover(&ctx)? {
//!     println!("{}", shader.display());
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod classify;
pub mod scan;

pub use classify::{VERSION_DIRECTIVE, classify, contains_version_directive, is_shader_source};
pub use scan::{discover, scan_directory};

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// A directory (or one of its entries) could not be listed. Discovery
    /// stops here; no partial result is returned.
    #[error("Error reading directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Alias for `Result<T, DiscoveryError>`.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
