//! Error types for installer operations.
//!
//! This module defines [`InstallerError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and end the run with exit code 1
//! - Command and method errors are caught per tool and rendered, never propagated
//! - Use `anyhow::Error` (via `InstallerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file could not be parsed as a tool catalog.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The executable of an installation command could not be started.
    #[error("Failed to start command '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An installation command exited non-zero (or was killed by a signal).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An installation command ran past the configured timeout and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// The tool has no catalog entry or its entry declares no methods.
    #[error("no installation methods available for {tool}")]
    NoInstallMethods { tool: String },

    /// Every declared installation method failed.
    #[error("all installation methods failed for {tool}")]
    AllMethodsFailed { tool: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallerError {
    /// Whether this error comes from loading the configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallerError>;
