//! # glslmass_core
//!
//! Foundational types shared by every glslmass crate:
//!
//! - [`CompileContext`] / [`SearchPath`]: what to scan and how
//! - [`BuildConfig`]: optional `glslmass.toml` settings and compiler lookup
//! - [`ConfigError`]: failures while assembling the above

pub mod config;
pub mod context;
pub mod errors;

pub use config::{BuildConfig, CompilerSection};
pub use context::{CompileContext, CompileContextBuilder, SearchPath};
pub use errors::ConfigError;
