//! Git operations
//!
//! Spawns the system git binary with inherited stdio so its progress and
//! error output reach the terminal as it happens.

use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

use crate::domain::plan::GitStep;
use crate::error::GitError;
use crate::tools::{get_tool_path, tools};

/// Something that can carry out a [`GitStep`]
pub trait GitRunner {
    /// Run one step to completion; `Err` when it could not start or exited non-zero
    async fn run(&self, step: &GitStep) -> Result<(), GitError>;

    /// True when steps are only announced, never executed
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Client for git operations
pub struct GitClient {
    /// git executable (`GIT_BIN` or PATH lookup)
    program: String,
    /// Working directory for git commands
    working_dir: Option<PathBuf>,
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitClient {
    /// Create a new git client for current directory
    pub fn new() -> Self {
        Self {
            program: get_tool_path(tools::GIT),
            working_dir: None,
        }
    }

    /// Create a git client for a specific directory
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(path.into()),
            ..Self::new()
        }
    }
}

impl GitRunner for GitClient {
    async fn run(&self, step: &GitStep) -> Result<(), GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(step.args());

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        debug!("Running: {}", step);

        // status() inherits stdin/stdout/stderr
        let status = cmd.status().await.map_err(|source| GitError::Spawn {
            command: step.to_string(),
            source,
        })?;

        debug!("{} exited with {}", step, status);

        if !status.success() {
            return Err(GitError::CommandFailed {
                command: step.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Runs nothing; the caller prints each step instead
#[derive(Debug, Default)]
pub struct DryRunGit;

impl GitRunner for DryRunGit {
    async fn run(&self, step: &GitStep) -> Result<(), GitError> {
        debug!("Skipping (dry run): {}", step);
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
