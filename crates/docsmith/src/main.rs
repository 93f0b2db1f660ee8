//! Docsmith CLI - documentation build pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Documentation build pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docsmith.toml config file
    #[arg(short, long, default_value = "docsmith.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert sources and generate the HTML documentation
    Build {
        /// Do not open the result in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// List the source documents a build would convert
    List,

    /// Package documentation for release
    Release,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Build { no_open } => {
            commands::build::run(&cli.config, no_open).await?;
        }
        Commands::List => {
            commands::list::run(&cli.config).await?;
        }
        Commands::Release => {
            commands::release::run().await?;
        }
    }

    Ok(())
}
