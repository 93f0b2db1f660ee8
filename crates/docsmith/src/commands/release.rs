//! Release packaging command.

use anyhow::Result;

/// Run the release command.
///
/// Packaging has never been wired up; the command exists so scripted
/// callers get a stable exit code instead of a usage error.
pub async fn run() -> Result<()> {
    tracing::warn!("The release task is not implemented; nothing was packaged.");

    Ok(())
}
