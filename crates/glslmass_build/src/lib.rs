//! # glslmass_build
//!
//! Decides which discovered shaders are stale and runs the external
//! compiler on them.
//!
//! - [`staleness`]: artifact naming and the timestamp comparison
//! - [`compiler`]: the [`ShaderCompiler`] seam and the `glslc` process runner
//! - [`driver`]: the sequential build loop
//! - [`summary`]: end-of-run counters and their report

use std::path::PathBuf;

use thiserror::Error;

pub mod compiler;
pub mod driver;
pub mod staleness;
pub mod summary;

pub use compiler::{CompileOutput, GlslcCompiler, ShaderCompiler};
pub use driver::{BuildDriver, BuildOutcome};
pub use staleness::{Staleness, output_path_for};
pub use summary::BuildSummary;

/// Why a single shader did not produce an artifact.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The compiler process could not be started (missing binary,
    /// permissions, ...). Nothing was compiled.
    #[error("Could not invoke compiler {program}: {source}")]
    Invocation {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran and exited unsuccessfully.
    #[error("Compiler reported failure for {path}: {stderr}")]
    CompilerReported {
        path: PathBuf,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        stderr: String,
    },

    /// The compiler succeeded but its output could not be moved into place.
    #[error("Failed to finalize artifact {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    /// True when the compiler never ran.
    #[inline]
    #[must_use]
    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::Invocation { .. })
    }
}

/// Alias for `Result<T, CompileError>`.
pub type Result<T> = std::result::Result<T, CompileError>;
