//! Deploy service - runs the deploy plan
//!
//! Detects the repository state, runs each git step in order and stops at the
//! first failure. Guidance and the closing message are only written once
//! every step has succeeded.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::config::DeployConfig;
use crate::domain::plan::{dry_run_line, COMPLETION_MESSAGE, DRY_RUN_MARKER};
use crate::domain::{DeployPlan, GitStep, RepoState};
use crate::error::DeployError;
use crate::infrastructure::GitRunner;
use crate::ui;

/// What a successful run did
#[derive(Debug)]
pub struct DeployOutcome {
    pub state: RepoState,
    pub executed: Vec<GitStep>,
}

/// Service for preparing and pushing the repository
pub struct DeployService<G> {
    git: G,
    config: DeployConfig,
}

impl<G: GitRunner> DeployService<G> {
    /// Create a new deploy service
    pub fn new(git: G, config: DeployConfig) -> Self {
        Self { git, config }
    }

    /// Run the first-run or update sequence for `working_dir`
    pub async fn execute(
        &self,
        working_dir: &Path,
        out: &mut impl Write,
    ) -> Result<DeployOutcome, DeployError> {
        let state = RepoState::detect(working_dir);
        debug!("Repository state in {}: {:?}", working_dir.display(), state);

        let plan = DeployPlan::for_state(state, &self.config);

        ui::write_title(
            out,
            &format!("🚀 {} Deployment Helper", self.config.project.name),
        )?;
        ui::write_step(out, &plan.announcement)?;

        let mut executed = Vec::with_capacity(plan.steps.len());
        let dry_run = self.git.is_dry_run();
        for step in &plan.steps {
            if dry_run {
                writeln!(out, "{}", dry_run_line(step))?;
            }
            // git writes straight to the terminal; keep our text ahead of it
            out.flush()?;
            self.git.run(step).await?;
            executed.push(step.clone());
        }

        info!("{} git step(s) completed", executed.len());

        ui::write_lines(out, &plan.follow_up)?;
        writeln!(out)?;
        if dry_run {
            ui::write_success(out, &format!("{} {}", COMPLETION_MESSAGE, DRY_RUN_MARKER))?;
        } else {
            ui::write_success(out, COMPLETION_MESSAGE)?;
        }
        out.flush()?;

        Ok(DeployOutcome {
            state: plan.state,
            executed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitError;
    use crate::infrastructure::DryRunGit;
    use std::sync::Mutex;

    /// Records every step; optionally fails the call at `fail_at` (0-based)
    #[derive(Default)]
    struct RecordingGit {
        calls: Mutex<Vec<GitStep>>,
        fail_at: Option<(usize, i32)>,
    }

    impl RecordingGit {
        fn failing_at(index: usize, code: i32) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_at: Some((index, code)),
            }
        }

        fn calls(&self) -> Vec<GitStep> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl GitRunner for RecordingGit {
        async fn run(&self, step: &GitStep) -> Result<(), GitError> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(step.clone());
            match self.fail_at {
                Some((at, code)) if at == index => Err(GitError::CommandFailed {
                    command: step.to_string(),
                    code: Some(code),
                }),
                _ => Ok(()),
            }
        }
    }

    fn init_repo(dir: &Path) {
        std::fs::create_dir(dir.join(".git")).unwrap();
    }

    fn commit(message: &str) -> GitStep {
        GitStep::Commit {
            message: message.to_string(),
        }
    }

    fn push_origin_main() -> GitStep {
        GitStep::Push {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_run_sequence_and_guidance() {
        let dir = tempfile::tempdir().unwrap();
        let service = DeployService::new(RecordingGit::default(), DeployConfig::default());
        let mut out = Vec::new();

        let outcome = service.execute(dir.path(), &mut out).await.unwrap();

        assert_eq!(outcome.state, RepoState::Uninitialized);
        assert_eq!(
            service.git.calls(),
            vec![
                GitStep::Init,
                GitStep::StageAll,
                commit("Initial commit: TutorConnect Platform"),
            ]
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("TutorConnect Deployment Helper"));
        assert!(text.contains("Setting up Git repository..."));
        assert!(text.contains("1. Create a new repository on GitHub"));
        assert!(text.contains("git remote add origin"));
        assert!(text.contains("3. Run: git push -u origin main"));
        assert!(text.contains("Then deploy to Railway"));
        assert!(text.contains("JWT_SECRET=your_secret_key"));
        assert!(text.contains(COMPLETION_MESSAGE));
        assert!(!text.contains("Changes pushed to GitHub!"));
    }

    #[tokio::test]
    async fn test_update_sequence_and_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let service = DeployService::new(RecordingGit::default(), DeployConfig::default());
        let mut out = Vec::new();

        let outcome = service.execute(dir.path(), &mut out).await.unwrap();

        assert_eq!(outcome.state, RepoState::Initialized);
        assert_eq!(
            service.git.calls(),
            vec![
                GitStep::StageAll,
                commit("Update: Ready for single platform deployment"),
                push_origin_main(),
            ]
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Pushing changes to GitHub..."));
        assert!(text.contains("Changes pushed to GitHub!"));
        assert!(text.contains("should automatically redeploy"));
        assert!(text.contains(COMPLETION_MESSAGE));
        assert!(!text.contains("JWT_SECRET"));
    }

    #[tokio::test]
    async fn test_second_step_failure_stops_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let service = DeployService::new(RecordingGit::failing_at(1, 128), DeployConfig::default());
        let mut out = Vec::new();

        let err = service.execute(dir.path(), &mut out).await.unwrap_err();

        assert_eq!(service.git.calls(), vec![GitStep::Init, GitStep::StageAll]);
        assert_eq!(err.exit_code(), 128);
        assert!(err.reported_by_tool());

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(COMPLETION_MESSAGE));
        assert!(!text.contains("Next steps"));
    }

    #[tokio::test]
    async fn test_second_step_failure_never_pushes() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        // git exits 1 when there is nothing to commit
        let service = DeployService::new(RecordingGit::failing_at(1, 1), DeployConfig::default());
        let mut out = Vec::new();

        let err = service.execute(dir.path(), &mut out).await.unwrap_err();

        let calls = service.git.calls();
        assert_eq!(calls.len(), 2);
        assert!(!calls.contains(&push_origin_main()));
        assert_ne!(err.exit_code(), 0);

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(COMPLETION_MESSAGE));
        assert!(!text.contains("Changes pushed to GitHub!"));
    }

    #[tokio::test]
    async fn test_push_failure_suppresses_completion() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let service = DeployService::new(RecordingGit::failing_at(2, 1), DeployConfig::default());
        let mut out = Vec::new();

        assert!(service.execute(dir.path(), &mut out).await.is_err());
        assert_eq!(service.git.calls().len(), 3);
        assert!(!String::from_utf8(out).unwrap().contains(COMPLETION_MESSAGE));
    }

    #[tokio::test]
    async fn test_repeated_updates_commit_each_time() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let service = DeployService::new(RecordingGit::default(), DeployConfig::default());

        service.execute(dir.path(), &mut Vec::new()).await.unwrap();
        service.execute(dir.path(), &mut Vec::new()).await.unwrap();

        let commits = service
            .git
            .calls()
            .into_iter()
            .filter(|s| matches!(s, GitStep::Commit { .. }))
            .count();
        assert_eq!(commits, 2);
        assert_eq!(service.git.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_configured_remote_and_branch() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let mut config = DeployConfig::default();
        config.repository.remote = "upstream".to_string();
        config.repository.branch = "release".to_string();
        let service = DeployService::new(RecordingGit::default(), config);

        service.execute(dir.path(), &mut Vec::new()).await.unwrap();

        assert_eq!(
            service.git.calls().last(),
            Some(&GitStep::Push {
                remote: "upstream".to_string(),
                branch: "release".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_dry_run_lists_first_run_commands_before_guidance() {
        let dir = tempfile::tempdir().unwrap();
        let service = DeployService::new(DryRunGit, DeployConfig::default());
        let mut out = Vec::new();

        service.execute(dir.path(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let init = text.find("[dry-run] git init").unwrap();
        let add = text.find("[dry-run] git add .").unwrap();
        let commit = text
            .find("[dry-run] git commit -m \"Initial commit: TutorConnect Platform\"")
            .unwrap();
        let guidance = text.find("Next steps").unwrap();
        assert!(init < add && add < commit && commit < guidance);
        assert!(!dir.path().join(".git").exists());
    }

    #[tokio::test]
    async fn test_dry_run_marks_closing_message() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let service = DeployService::new(DryRunGit, DeployConfig::default());
        let mut out = Vec::new();

        service.execute(dir.path(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[dry-run] git push origin main"));
        assert!(text.contains(COMPLETION_MESSAGE));
        assert!(text.contains(DRY_RUN_MARKER));
    }

    #[tokio::test]
    async fn test_real_run_has_no_dry_run_text() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());
        let service = DeployService::new(RecordingGit::default(), DeployConfig::default());
        let mut out = Vec::new();

        service.execute(dir.path(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("[dry-run]"));
        assert!(!text.contains(DRY_RUN_MARKER));
    }

    #[tokio::test]
    async fn test_project_name_only_changes_header() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DeployConfig::default();
        config.project.name = "Acme".to_string();
        let service = DeployService::new(RecordingGit::default(), config);
        let mut out = Vec::new();

        service.execute(dir.path(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Acme Deployment Helper"));
        assert_eq!(
            service.git.calls().last(),
            Some(&commit("Initial commit: TutorConnect Platform"))
        );
    }
}
