//! Remote, branch and commit message settings.

use serde::{Deserialize, Serialize};

/// Repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Remote pushed to on the update path
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch pushed to on the update path
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Message for the first snapshot commit
    #[serde(default = "default_initial_commit_message")]
    pub initial_commit_message: String,

    /// Message for every later snapshot commit
    #[serde(default = "default_update_commit_message")]
    pub update_commit_message: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_initial_commit_message() -> String {
    "Initial commit: TutorConnect Platform".to_string()
}

fn default_update_commit_message() -> String {
    "Update: Ready for single platform deployment".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            initial_commit_message: default_initial_commit_message(),
            update_commit_message: default_update_commit_message(),
        }
    }
}
