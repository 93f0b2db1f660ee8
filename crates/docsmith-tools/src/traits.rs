//! Trait definitions for external tools.

use std::ffi::OsString;

/// A third-party executable the build pipeline can probe for and invoke.
///
/// Tools are opaque collaborators: the pipeline never parses their output,
/// only their exit status.
pub trait ExternalTool: Send + Sync {
    /// Program name as invoked, used in error messages.
    fn program(&self) -> &str;

    /// Whether the program can be located on the search path.
    fn exists(&self) -> bool;

    /// Run the program to completion with the given arguments.
    ///
    /// Output streams through to the caller's terminal. Returns `Ok` only
    /// if the program exits successfully.
    fn run(&self, args: &[OsString]) -> Result<(), ToolError>;
}

/// Errors that can occur when invoking an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}
