//! Error Types
//!
//! [`ConfigError`] covers everything that can go wrong before discovery
//! starts:
//! - resolving the working directory used as the default base directory
//! - reading or parsing a `glslmass.toml` file

use std::path::PathBuf;

use thiserror::Error;

/// Failure while assembling the compile context or the build configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The current working directory could not be determined.
    #[error("Failed to resolve working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// A configured path could not be made absolute.
    #[error("Failed to resolve path {path}: {source}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;
