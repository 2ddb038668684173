//! # glslmass
//!
//! Incremental mass compiler for GLSL shaders.
//!
//! A run has two sequential phases:
//!
//! 1. **Discovery** ([`glslmass_discovery`]): walk the base directory and any
//!    include directories, skipping excluded paths, and keep every regular
//!    file that carries a `#version` directive.
//! 2. **Build** ([`glslmass_build`]): for each source, compare its timestamp
//!    with `<source>.spv`, and run the external compiler on the stale ones.
//!
//! ```rust,ignore
//! use glslmass::prelude::*;
//!
//! let ctx = CompileContext::builder().base_dir("assets/shaders").recursive(true).build()?;
//! let config = BuildConfig::load_from_dir(ctx.base_dir())?;
//! let summary = glslmass::compile_all(&ctx, &config, GlslcCompiler::from_config(&config))?;
//! println!("{summary}");
//! ```

pub mod cli;
pub mod errors;

pub use glslmass_build;
pub use glslmass_core;
pub use glslmass_discovery;

pub use errors::{CliError, GlslmassError, Result};

use glslmass_build::{BuildDriver, BuildSummary, ShaderCompiler};
use glslmass_core::{BuildConfig, CompileContext};

pub mod prelude {
    pub use glslmass_build::{BuildDriver, BuildSummary, GlslcCompiler, ShaderCompiler};
    pub use glslmass_core::{BuildConfig, CompileContext, SearchPath};
    pub use glslmass_discovery::discover;
}

/// Discovers every shader described by `ctx` and builds the stale ones with
/// `compiler`.
///
/// Only a discovery failure aborts the run. Individual compile failures are
/// counted in the returned summary.
pub fn compile_all<C: ShaderCompiler>(
    ctx: &CompileContext,
    config: &BuildConfig,
    compiler: C,
) -> Result<BuildSummary> {
    let shaders = glslmass_discovery::discover(ctx)?;
    let driver = BuildDriver::from_context(ctx, config, compiler);
    Ok(driver.run(&shaders))
}
