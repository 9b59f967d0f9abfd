//! Project identity shown in the deploy header and the suggested remote URL.

use serde::{Deserialize, Serialize};

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Display name in the header (e.g., "TutorConnect")
    ///
    /// Commit messages come from `repository`, not from this name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Clone URL suggested for `git remote add`
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

fn default_name() -> String {
    "TutorConnect".to_string()
}

fn default_repository_url() -> String {
    "https://github.com/yourusername/tutorconnect-platform.git".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            repository_url: default_repository_url(),
        }
    }
}
