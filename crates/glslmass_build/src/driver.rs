//! Build Driver
//!
//! Walks the discovered candidates one at a time: staleness check, compile,
//! tally. A failing shader never stops the remaining ones.
//!
//! Artifacts are produced through a staging file next to the output
//! (`shader.vert.spv.tmp`) that is renamed into place only after the
//! compiler exits successfully. An interrupted or failed compile therefore
//! leaves the previous artifact (or none) behind, never a truncated one with
//! a fresh timestamp.

use std::path::{Path, PathBuf};

use glslmass_core::config::DEFAULT_OUTPUT_SUFFIX;
use glslmass_core::{BuildConfig, CompileContext};

use crate::compiler::{CompileOutput, ShaderCompiler};
use crate::staleness::{self, Staleness};
use crate::summary::BuildSummary;
use crate::{CompileError, Result};

const STAGING_SUFFIX: &str = ".tmp";

/// What happened to a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Compiled,
    UpToDate,
}

pub struct BuildDriver<C> {
    compiler: C,
    force: bool,
    output_suffix: String,
}

impl<C: ShaderCompiler> BuildDriver<C> {
    #[must_use]
    pub fn new(compiler: C) -> Self {
        Self {
            compiler,
            force: false,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Driver configured from the run's context and config file.
    #[must_use]
    pub fn from_context(ctx: &CompileContext, config: &BuildConfig, compiler: C) -> Self {
        Self::new(compiler)
            .force(ctx.force())
            .output_suffix(config.compiler.output_suffix.clone())
    }

    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn output_path(&self, source: &Path) -> PathBuf {
        staleness::output_path_for(source, &self.output_suffix)
    }

    /// Processes every candidate and prints the per-shader confirmations.
    /// The summary is returned, not printed.
    #[must_use]
    pub fn run(&self, shaders: &[PathBuf]) -> BuildSummary {
        let mut summary = BuildSummary {
            total: shaders.len(),
            ..Default::default()
        };

        for source in shaders {
            match self.build_one(source) {
                Ok(BuildOutcome::Compiled) => {
                    println!("Compiled shader: {}\n------------", source.display());
                    summary.compiled += 1;
                }
                Ok(BuildOutcome::UpToDate) => summary.skipped += 1,
                Err(e @ CompileError::Invocation { .. }) => {
                    log::error!("Failed to compile shader {}: {}", source.display(), e);
                    summary.not_invoked += 1;
                }
                Err(CompileError::CompilerReported { stderr, .. }) => {
                    log::error!(
                        "Failed to compile shader: {}\n{}",
                        source.display(),
                        stderr.trim_end()
                    );
                    summary.failed += 1;
                }
                Err(e @ CompileError::Artifact { .. }) => {
                    log::error!("Failed to compile shader {}: {}", source.display(), e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Checks and, if needed, compiles a single source.
    pub fn build_one(&self, source: &Path) -> Result<BuildOutcome> {
        let output = self.output_path(source);

        let state = staleness::check(source, &output, self.force);
        if !state.needs_compile() {
            log::debug!("Up to date: {}", source.display());
            return Ok(BuildOutcome::UpToDate);
        }
        if state == Staleness::Outdated {
            log::debug!("Outdated: {}", source.display());
        }

        let result = self.compile_atomically(source, &output)?;
        if !result.stderr.trim().is_empty() {
            log::warn!("{}: {}", source.display(), result.stderr.trim_end());
        }
        if !result.stdout.trim().is_empty() {
            log::debug!("{}: {}", source.display(), result.stdout.trim_end());
        }

        Ok(BuildOutcome::Compiled)
    }

    fn compile_atomically(&self, source: &Path, output: &Path) -> Result<CompileOutput> {
        let staging = staleness::output_path_for(output, STAGING_SUFFIX);

        let result = match self.compiler.compile(source, &staging) {
            Ok(result) => result,
            Err(e) => {
                discard(&staging);
                return Err(e);
            }
        };

        if let Err(e) = std::fs::rename(&staging, output) {
            discard(&staging);
            return Err(CompileError::Artifact {
                path: output.to_path_buf(),
                source: e,
            });
        }

        Ok(result)
    }
}

fn discard(path: &Path) {
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        log::warn!("Failed to remove staging file {}: {}", path.display(), e);
    }
}
