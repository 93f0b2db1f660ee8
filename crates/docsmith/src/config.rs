//! Configuration file handling (docsmith.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use docsmith_pipeline::BuildConfig;
use serde::Deserialize;

/// Configuration file structure (docsmith.toml).
///
/// Every section and key is optional. A missing section behaves the same
/// as one whose keys are all unset, and a missing file yields defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub package: PackageConfig,
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Staging namespace for converted documents
    pub name: String,
    /// Documentation title shown by the generator
    pub title: String,
    /// Short project identifier
    pub short_name: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            title: default_title(),
            short_name: default_short_name(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Source `.rst` tree
    pub docs: String,
    /// Final HTML output directory
    pub html: String,
    /// Staging directory for converted documents
    pub build: String,
    /// Annotated source handed to the generator
    pub src: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            docs: default_docs_dir(),
            html: default_html_dir(),
            build: default_build_dir(),
            src: default_src_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Documentation generator binary
    pub generator: String,
    /// Per-document converter binary
    pub converter: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            converter: default_converter(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Open the generated index after a successful build
    pub open: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            open: default_open(),
        }
    }
}

fn default_package_name() -> String {
    "DocTest".to_string()
}
fn default_title() -> String {
    "DocTest Documentation".to_string()
}
fn default_short_name() -> String {
    "DocTest".to_string()
}
fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_html_dir() -> String {
    "docs/html".to_string()
}
fn default_build_dir() -> String {
    "build/docs".to_string()
}
fn default_src_dir() -> String {
    "src".to_string()
}
fn default_generator() -> String {
    "phpdoc".to_string()
}
fn default_converter() -> String {
    "rst2phpdoc.py".to_string()
}
fn default_open() -> bool {
    true
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Resolve the file configuration into pipeline settings.
    pub fn into_build_config(self, no_open: bool) -> BuildConfig {
        BuildConfig {
            docs_dir: self.paths.docs.into(),
            html_dir: self.paths.html.into(),
            build_dir: self.paths.build.into(),
            src_dir: self.paths.src.into(),
            package_name: self.package.name,
            title: self.package.title,
            short_name: self.package.short_name,
            generator: self.tools.generator,
            converter: self.tools.converter,
            open: self.build.open && !no_open,
        }
    }
}
