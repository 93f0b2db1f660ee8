//! Source document listing command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsmith_pipeline::discover_documents;

use crate::config::load_config;

/// Run the list command.
///
/// Walks the same source tree a build would and logs each document,
/// without requiring the external tools to be installed.
pub async fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;
    let docs_dir = PathBuf::from(&file_config.paths.docs);

    if !docs_dir.exists() {
        anyhow::bail!("Source directory not found: {}", docs_dir.display());
    }

    let documents = discover_documents(&docs_dir)
        .with_context(|| format!("Failed to scan {}", docs_dir.display()))?;

    for doc in &documents {
        tracing::info!("Parsing: {}", doc.path.display());
    }

    tracing::info!("{} documents", documents.len());

    Ok(())
}
