//! External tool invocation for the docsmith build pipeline.
//!
//! The pipeline delegates all document conversion and HTML generation to
//! third-party binaries. This crate wraps those binaries behind a capability
//! trait so builds can be exercised against fakes instead of real tools.

pub mod system;
pub mod traits;

pub use system::SystemTool;
pub use traits::{ExternalTool, ToolError};
