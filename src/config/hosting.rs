//! Hosting platform guidance printed after the first run.

use serde::{Deserialize, Serialize};

/// Hosting platform configuration
///
/// Only ever rendered into instructions; nothing here is contacted or checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingConfig {
    /// Platform display name
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Where the user signs in
    #[serde(default = "default_url")]
    pub url: String,

    /// `NAME=value` pairs the user must add on the platform
    #[serde(default = "default_environment")]
    pub environment: Vec<String>,
}

fn default_platform() -> String {
    "Railway".to_string()
}

fn default_url() -> String {
    "railway.app".to_string()
}

fn default_environment() -> Vec<String> {
    vec!["JWT_SECRET=your_secret_key".to_string()]
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            url: default_url(),
            environment: default_environment(),
        }
    }
}
