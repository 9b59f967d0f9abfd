use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::DeployConfig;
use crate::error::DeployError;
use crate::infrastructure::{DryRunGit, GitClient};
use crate::services::DeployService;

/// Run the first-run or update sequence in `working_dir`
pub async fn execute(working_dir: String, config: Option<String>, dry_run: bool) -> Result<()> {
    let dir = Path::new(&working_dir);
    if !dir.is_dir() {
        bail!("Working directory not found: {}", dir.display());
    }

    let explicit = config.map(PathBuf::from);
    if let Some(path) = DeployConfig::resolved_path(explicit.as_deref(), dir) {
        debug!("Using config {}", path.display());
    }
    let config = DeployConfig::load(explicit.as_deref(), dir).map_err(DeployError::from)?;

    let mut stdout = std::io::stdout();

    let outcome = if dry_run {
        info!("Dry run: git commands will be printed, not executed");
        DeployService::new(DryRunGit, config)
            .execute(dir, &mut stdout)
            .await?
    } else {
        DeployService::new(GitClient::in_dir(dir), config)
            .execute(dir, &mut stdout)
            .await?
    };

    debug!(
        "Finished {:?} path with {} step(s)",
        outcome.state,
        outcome.executed.len()
    );

    Ok(())
}
