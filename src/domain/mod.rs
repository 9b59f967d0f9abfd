//! Domain layer - pure business logic
//!
//! This module contains business logic with no external I/O.
//! Types and functions here can be unit tested without mocking.

pub mod plan;
pub mod theme;

// Re-export commonly used types
pub use plan::{DeployPlan, GitStep, RepoState};
pub use theme::ThemeConfig;
