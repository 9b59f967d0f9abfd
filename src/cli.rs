//! CLI definitions for deploy-helper
//!
//! Running the binary with no arguments performs the deploy flow.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "deploy-helper",
    version,
    about = "Prepares the project repository for deployment",
    long_about = "Initializes and commits the repository on first run, or commits and pushes it on later runs.\nAlso renders the front-end theme config from its tokens."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to inspect and run git in
    #[arg(long, global = true, default_value = ".")]
    pub working_dir: String,

    /// Config file (defaults to deploy.yaml in the working directory, if present)
    #[arg(long, global = true, env = "DEPLOY_HELPER_CONFIG")]
    pub config: Option<String>,

    /// Print git commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commit (and push, once initialized) the working directory
    Deploy,

    /// Validate theme tokens and render tailwind.config.js
    Theme {
        /// Theme token file (defaults to the built-in tokens)
        #[arg(long)]
        input: Option<String>,

        /// Write the rendered config here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}
