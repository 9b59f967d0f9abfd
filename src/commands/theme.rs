use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::domain::ThemeConfig;
use crate::error::DeployError;

/// Validate theme tokens and render the styling tool config
///
/// Prints to stdout unless `output` is given.
pub async fn execute(input: Option<String>, output: Option<String>) -> Result<()> {
    let theme = match input {
        Some(ref path) => ThemeConfig::load(Path::new(path)),
        None => ThemeConfig::builtin(),
    }
    .map_err(DeployError::from)?;

    theme.validate().map_err(DeployError::from)?;
    let rendered = theme.render_tailwind_config().map_err(DeployError::from)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &rendered)
                .await
                .with_context(|| format!("Failed to write {}", path))?;
            info!("Wrote theme config to {}", path);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .map_err(DeployError::from)?;
            stdout.flush().map_err(DeployError::from)?;
        }
    }

    Ok(())
}
