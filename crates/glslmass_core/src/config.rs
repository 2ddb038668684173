//! Build Configuration
//!
//! Optional per-project settings read from `glslmass.toml` in the base
//! directory:
//!
//! ```toml
//! [compiler]
//! path = "/opt/vulkan/bin/glslc"
//! args = ["--target-env=vulkan1.3", "-O"]
//! output_suffix = ".spv"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so that typos surface
//! instead of being silently ignored.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "glslmass.toml";
pub const DEFAULT_COMPILER: &str = "glslc";
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".spv";

/// Environment variable naming the compiler binary.
pub const COMPILER_ENV_VAR: &str = "GLSLC";
/// Root of a Vulkan SDK install, searched for `glslc`.
pub const VULKAN_SDK_ENV_VAR: &str = "VULKAN_SDK";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub compiler: CompilerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSection {
    /// Explicit compiler binary; takes precedence over the environment.
    pub path: Option<PathBuf>,
    /// Extra arguments passed before the source path.
    pub args: Vec<String>,
    pub output_suffix: String,
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            path: None,
            args: Vec::new(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl BuildConfig {
    /// Parses TOML text. `origin` is only used for error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `glslmass.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        log::info!("Using config {}", path.display());
        Self::load(&path)
    }

    /// Picks the compiler binary from the process environment.
    #[must_use]
    pub fn resolve_compiler(&self) -> PathBuf {
        self.resolve_compiler_with(|key| std::env::var_os(key))
    }

    /// Resolution order: config `path`, `GLSLC`, `glslc` inside
    /// `VULKAN_SDK`, then bare `glslc` looked up on `PATH`.
    #[must_use]
    pub fn resolve_compiler_with<F>(&self, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(path) = &self.compiler.path {
            return path.clone();
        }

        if let Some(glslc) = env(COMPILER_ENV_VAR).filter(|v| !v.is_empty()) {
            return PathBuf::from(glslc);
        }

        if let Some(sdk) = env(VULKAN_SDK_ENV_VAR).filter(|v| !v.is_empty()) {
            let sdk = PathBuf::from(sdk);
            let candidates = [
                sdk.join("bin").join(DEFAULT_COMPILER),
                sdk.join("Bin").join("glslc.exe"),
            ];
            if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
                return found;
            }
            log::warn!(
                "{} is set to {} but no glslc was found there",
                VULKAN_SDK_ENV_VAR,
                sdk.display()
            );
        }

        PathBuf::from(DEFAULT_COMPILER)
    }
}
