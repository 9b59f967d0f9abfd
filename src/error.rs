//! Centralized error types for deploy-helper
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for deploy-helper operations
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit status for this error.
    ///
    /// A failed git command hands its own status back to the caller.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Git(GitError::CommandFailed { code: Some(code), .. }) => {
                u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1)
            }
            _ => 1,
        }
    }

    /// True when the external tool has already printed its own diagnostic.
    pub fn reported_by_tool(&self) -> bool {
        matches!(self, Self::Git(GitError::CommandFailed { .. }))
    }
}

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git command failed: {command} (exit status: {})", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    CommandFailed { command: String, code: Option<i32> },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration:\n  {}", .problems.join("\n  "))]
    InvalidValue { problems: Vec<String> },
}

/// Theme token errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Theme file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse theme {source_name}: {message}")]
    Parse { source_name: String, message: String },

    #[error("Invalid theme tokens:\n  {}", .problems.join("\n  "))]
    Invalid { problems: Vec<String> },
}
