//! Error Types
//!
//! [`GlslmassError`] gathers the failures that end a run early:
//! - malformed command line ([`CliError`])
//! - unusable context or config file ([`ConfigError`])
//! - unreadable directory during discovery ([`DiscoveryError`])
//!
//! Per-shader compile failures are not here; they are tallied by the build
//! driver and reported in the summary.

use thiserror::Error;

pub use glslmass_core::ConfigError;
pub use glslmass_discovery::DiscoveryError;

#[derive(Error, Debug)]
pub enum CliError {
    /// A flag that takes a value was the last argument.
    #[error("'{flag}': expected filepath to follow command.")]
    MissingValue { flag: &'static str },
}

#[derive(Error, Debug)]
pub enum GlslmassError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Alias for `Result<T, GlslmassError>`.
pub type Result<T> = std::result::Result<T, GlslmassError>;
