//! Documentation build command.

use std::path::Path;

use anyhow::Result;
use docsmith_pipeline::DocBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, no_open: bool) -> Result<()> {
    tracing::info!("Building documentation...");

    let file_config = load_config(config_path)?;
    let config = file_config.into_build_config(no_open);

    let result = DocBuilder::new(config).build().await?;

    tracing::info!(
        "Converted {} documents in {}ms",
        result.documents,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
