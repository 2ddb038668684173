//! External compiler invocation.
//!
//! [`ShaderCompiler`] is the seam between the driver and the process that
//! turns GLSL into SPIR-V. [`GlslcCompiler`] runs a `glslc`-compatible
//! binary as `<program> [args..] <source> -o <output>`.

use std::path::{Path, PathBuf};
use std::process::Command;

use glslmass_core::BuildConfig;

use crate::{CompileError, Result};

/// Captured output of a successful compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    pub stdout: String,
    /// Warnings usually end up here even when the compile succeeds.
    pub stderr: String,
}

pub trait ShaderCompiler {
    /// Compiles `source` into `output`, blocking until the compiler exits.
    fn compile(&self, source: &Path, output: &Path) -> Result<CompileOutput>;
}

impl<F> ShaderCompiler for F
where
    F: Fn(&Path, &Path) -> Result<CompileOutput>,
{
    fn compile(&self, source: &Path, output: &Path) -> Result<CompileOutput> {
        self(source, output)
    }
}

#[derive(Debug, Clone)]
pub struct GlslcCompiler {
    program: PathBuf,
    args: Vec<String>,
}

impl GlslcCompiler {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Compiler and extra arguments as resolved from `config` and the
    /// environment.
    #[must_use]
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.resolve_compiler()).with_args(config.compiler.args.clone())
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ShaderCompiler for GlslcCompiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<CompileOutput> {
        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(source)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|e| CompileError::Invocation {
                program: self.program.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&result.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();

        if result.status.success() {
            Ok(CompileOutput { stdout, stderr })
        } else {
            Err(CompileError::CompilerReported {
                path: source.to_path_buf(),
                code: result.status.code(),
                stderr,
            })
        }
    }
}
