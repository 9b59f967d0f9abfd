//! Infrastructure layer - external I/O adapters
//!
//! Everything that talks to another process lives here. Right now that is
//! only the system git binary.

pub mod git;

// Re-export commonly used types
pub use git::{DryRunGit, GitClient, GitRunner};
