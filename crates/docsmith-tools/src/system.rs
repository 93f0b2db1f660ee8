//! PATH-resolved system tools.

use std::ffi::OsString;
use std::process::Command;

use crate::traits::{ExternalTool, ToolError};

/// An external tool resolved from the system search path.
#[derive(Debug, Clone)]
pub struct SystemTool {
    program: String,
}

impl SystemTool {
    /// Create a tool handle for the given program name.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExternalTool for SystemTool {
    fn program(&self) -> &str {
        &self.program
    }

    fn exists(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn run(&self, args: &[OsString]) -> Result<(), ToolError> {
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| ToolError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_does_not_exist() {
        let tool = SystemTool::new("docsmith-no-such-tool-anywhere");
        assert!(!tool.exists());
    }

    #[test]
    fn launching_missing_program_fails() {
        let tool = SystemTool::new("docsmith-no-such-tool-anywhere");

        let err = tool.run(&[]).unwrap_err();

        assert!(matches!(err, ToolError::Launch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn reports_nonzero_exit() {
        let tool = SystemTool::new("false");

        let err = tool.run(&[]).unwrap_err();

        match err {
            ToolError::Failed { program, status } => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_run_is_ok() {
        let tool = SystemTool::new("true");

        assert!(tool.exists());
        assert!(tool.run(&[]).is_ok());
    }
}
