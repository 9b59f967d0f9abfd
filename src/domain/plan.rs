//! Deploy plan domain types
//!
//! Turns the detected repository state and configuration into an ordered list
//! of git steps plus the text shown once they succeed. No I/O beyond the
//! single `.git` existence check in [`RepoState::detect`].

use std::fmt;
use std::path::Path;

use crate::config::DeployConfig;

/// Name of the version-control metadata directory
pub const GIT_METADATA_DIR: &str = ".git";

/// Whether the working directory already has version-control metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// No `.git` yet: first run
    Uninitialized,
    /// `.git` present: update run
    Initialized,
}

impl RepoState {
    /// Inspect `dir` once
    pub fn detect(dir: &Path) -> Self {
        if dir.join(GIT_METADATA_DIR).exists() {
            Self::Initialized
        } else {
            Self::Uninitialized
        }
    }
}

/// A single git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStep {
    /// `git init`
    Init,
    /// `git add .`
    StageAll,
    /// `git commit -m <message>`
    Commit { message: String },
    /// `git push <remote> <branch>`
    Push { remote: String, branch: String },
}

impl GitStep {
    /// Arguments passed to the git executable
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::Init => vec!["init"],
            Self::StageAll => vec!["add", "."],
            Self::Commit { message } => vec!["commit", "-m", message.as_str()],
            Self::Push { remote, branch } => vec!["push", remote.as_str(), branch.as_str()],
        }
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Commit { message } => write!(f, "git commit -m {:?}", message),
            _ => write!(f, "git {}", self.args().join(" ")),
        }
    }
}

/// What to run and what to say afterwards
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub state: RepoState,
    /// Printed before the first step
    pub announcement: String,
    pub steps: Vec<GitStep>,
    /// Printed after every step succeeded
    pub follow_up: Vec<String>,
}

impl DeployPlan {
    /// Build the plan for `state`
    pub fn for_state(state: RepoState, config: &DeployConfig) -> Self {
        match state {
            RepoState::Uninitialized => Self::first_run(config),
            RepoState::Initialized => Self::update(config),
        }
    }

    fn first_run(config: &DeployConfig) -> Self {
        Self {
            state: RepoState::Uninitialized,
            announcement: "📦 Setting up Git repository...".to_string(),
            steps: vec![
                GitStep::Init,
                GitStep::StageAll,
                GitStep::Commit {
                    message: config.repository.initial_commit_message.clone(),
                },
            ],
            follow_up: first_run_guidance(config),
        }
    }

    fn update(config: &DeployConfig) -> Self {
        let repo = &config.repository;
        Self {
            state: RepoState::Initialized,
            announcement: "📤 Pushing changes to GitHub...".to_string(),
            steps: vec![
                GitStep::StageAll,
                GitStep::Commit {
                    message: repo.update_commit_message.clone(),
                },
                GitStep::Push {
                    remote: repo.remote.clone(),
                    branch: repo.branch.clone(),
                },
            ],
            follow_up: vec![
                String::new(),
                "✅ Changes pushed to GitHub!".to_string(),
                "🔄 Your deployment platform should automatically redeploy".to_string(),
            ],
        }
    }
}

/// Manual steps printed after the first commit.
///
/// Values are substituted from config verbatim; nothing is checked.
pub fn first_run_guidance(config: &DeployConfig) -> Vec<String> {
    let repo = &config.repository;
    let hosting = &config.hosting;

    let mut lines = vec![
        String::new(),
        "✅ Git repository initialized!".to_string(),
        String::new(),
        "📋 Next steps:".to_string(),
        "1. Create a new repository on GitHub".to_string(),
        format!(
            "2. Run: git remote add {} {}",
            repo.remote, config.project.repository_url
        ),
        format!("3. Run: git push -u {} {}", repo.remote, repo.branch),
        String::new(),
        format!("🚀 Then deploy to {}:", hosting.platform),
        format!("1. Go to {}", hosting.url),
        "2. Sign up with GitHub".to_string(),
        "3. New Project → Deploy from GitHub repo".to_string(),
        "4. Select your repository".to_string(),
    ];

    for (offset, variable) in hosting.environment.iter().enumerate() {
        lines.push(format!("{}. Add environment variable: {}", 5 + offset, variable));
    }

    lines
}

/// Printed once the whole sequence has succeeded
pub const COMPLETION_MESSAGE: &str = "🎉 Deployment helper completed!";

/// Appended to the closing message when no git command was executed
pub const DRY_RUN_MARKER: &str = "(dry run: no git commands were executed)";

/// How a step is shown when it is not executed
pub fn dry_run_line(step: &GitStep) -> String {
    format!("[dry-run] {}", step)
}
