//! CLI command implementations.

pub mod build;
pub mod list;
pub mod release;
