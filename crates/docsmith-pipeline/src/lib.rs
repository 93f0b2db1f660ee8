//! Documentation build pipeline for docsmith.
//!
//! Orchestrates the external converter and generator binaries: verifies they
//! are installed, rebuilds the output tree, converts each `.rst` source
//! document into the staging tree, runs the generator over the result, and
//! opens the generated HTML.

pub mod builder;
pub mod discover;

pub use builder::{BuildConfig, BuildError, BuildReport, DocBuilder};
pub use discover::{discover_documents, Document};
pub use docsmith_tools::{ExternalTool, ToolError};
