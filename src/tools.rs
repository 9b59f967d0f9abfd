//! Runtime tool path resolution
//!
//! For each external tool (currently only `git`) we:
//! 1. Check for an environment variable `{TOOL}_BIN` (e.g., `GIT_BIN`)
//! 2. Look the tool up on PATH
//! 3. Fall back to the bare name and let the OS report a spawn error
//!
//! ```rust,ignore
//! use crate::tools::{get_tool_path, tools};
//!
//! let git = get_tool_path(tools::GIT);
//! Command::new(&git).args(["status"]).status().await?;
//! ```

use std::env;
use tracing::debug;

/// Get the path to an external tool
///
/// Checks `{TOOL}_BIN` (uppercase tool name + "_BIN") first, then PATH.
pub fn get_tool_path(tool: &str) -> String {
    let env_var = format!("{}_BIN", tool.to_uppercase().replace('-', "_"));
    if let Ok(path) = env::var(&env_var) {
        if !path.is_empty() {
            debug!("Using {} from {}", tool, env_var);
            return path;
        }
    }

    match which::which(tool) {
        Ok(path) => path.display().to_string(),
        Err(_) => tool.to_string(),
    }
}

/// Common tool names
pub mod tools {
    pub const GIT: &str = "git";
}
