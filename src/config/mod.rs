//! # Deployment Configuration
//!
//! Optional `deploy.yaml` in the working directory (or the file given with
//! `--config`). Every field has a default, so a missing implicit file simply
//! yields [`DeployConfig::default`].
//!
//! ## Example
//!
//! ```yaml
//! project:
//!   name: TutorConnect
//! repository:
//!   remote: origin
//!   branch: main
//! hosting:
//!   platform: Railway
//!   environment:
//!     - JWT_SECRET=your_secret_key
//! ```

pub mod hosting;
pub mod project;
pub mod repository;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use hosting::HostingConfig;
use project::ProjectConfig;
use repository::RepositoryConfig;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "deploy.yaml";

/// Complete deploy-helper configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub hosting: HostingConfig,
}

impl DeployConfig {
    /// Resolve and load configuration.
    ///
    /// An explicit path must exist. Without one, `{working_dir}/deploy.yaml`
    /// is used when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::from_file(path)?
            }
            None => {
                let implicit = working_dir.join(CONFIG_FILE_NAME);
                if implicit.exists() {
                    Self::from_file(&implicit)?
                } else {
                    debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, working_dir.display());
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating it
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content, path)
    }

    fn from_yaml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Check fields that would produce a broken git invocation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        let repo = &self.repository;

        if repo.remote.trim().is_empty() {
            problems.push("repository.remote must not be empty".to_string());
        }
        if repo.branch.trim().is_empty() {
            problems.push("repository.branch must not be empty".to_string());
        }
        if repo.initial_commit_message.trim().is_empty() {
            problems.push("repository.initial_commit_message must not be empty".to_string());
        }
        if repo.update_commit_message.trim().is_empty() {
            problems.push("repository.update_commit_message must not be empty".to_string());
        }
        if self.project.name.trim().is_empty() {
            problems.push("project.name must not be empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue { problems })
        }
    }

    /// Path that [`DeployConfig::load`] would read, if any
    pub fn resolved_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let implicit = working_dir.join(CONFIG_FILE_NAME);
                implicit.exists().then_some(implicit)
            }
        }
    }
}
