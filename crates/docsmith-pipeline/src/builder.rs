//! Documentation build pipeline.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use docsmith_tools::{ExternalTool, SystemTool, ToolError};

use crate::discover::discover_documents;

/// Example-code directory the generator is told to skip.
const EXAMPLES_DIR: &str = "examples";

/// File the generator treats as the project index page.
const README_FILE: &str = "README.rst";

/// Configuration for a documentation build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source `.rst` tree
    pub docs_dir: PathBuf,

    /// Final HTML output directory (wiped and regenerated)
    pub html_dir: PathBuf,

    /// Staging directory for converted documents (wiped and regenerated)
    pub build_dir: PathBuf,

    /// Annotated source handed to the generator
    pub src_dir: PathBuf,

    /// Staging namespace for converted documents
    pub package_name: String,

    /// Documentation title passed to the generator
    pub title: String,

    /// Short project identifier passed to the generator
    pub short_name: String,

    /// Documentation generator binary
    pub generator: String,

    /// Per-document converter binary
    pub converter: String,

    /// Open the generated index in the default viewer after a build
    pub open: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            html_dir: PathBuf::from("docs/html"),
            build_dir: PathBuf::from("build/docs"),
            src_dir: PathBuf::from("src"),
            package_name: "DocTest".to_string(),
            title: "DocTest Documentation".to_string(),
            short_name: "DocTest".to_string(),
            generator: "phpdoc".to_string(),
            converter: "rst2phpdoc.py".to_string(),
            open: true,
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of documents converted
    pub documents: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Final HTML output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("You must install {tool} to build documentation.")]
    MissingDependency { tool: String },

    #[error("Failed to reset output directories: {0}")]
    ResetError(String),

    #[error("Failed to scan source documents: {0}")]
    ScanError(String),

    #[error("Failed to prepare staging directory: {0}")]
    StagingError(String),

    #[error("Failed to convert {path}")]
    ConversionFailure {
        path: String,
        #[source]
        source: ToolError,
    },

    #[error("There was an error building the documentation.")]
    GenerationFailure(#[source] ToolError),
}

/// Documentation build pipeline.
///
/// Runs the stages strictly in order and halts on the first failure.
/// Nothing is retried and no partial output is considered valid.
pub struct DocBuilder {
    config: BuildConfig,
    converter: Arc<dyn ExternalTool>,
    generator: Arc<dyn ExternalTool>,
}

impl DocBuilder {
    /// Create a builder that invokes the configured system binaries.
    pub fn new(config: BuildConfig) -> Self {
        let converter = Arc::new(SystemTool::new(config.converter.clone()));
        let generator = Arc::new(SystemTool::new(config.generator.clone()));

        Self {
            config,
            converter,
            generator,
        }
    }

    /// Create a builder with explicit tool implementations.
    pub fn with_tools(
        config: BuildConfig,
        converter: Arc<dyn ExternalTool>,
        generator: Arc<dyn ExternalTool>,
    ) -> Self {
        Self {
            config,
            converter,
            generator,
        }
    }

    /// Run the full build pipeline.
    pub async fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        self.check_prerequisites()?;
        self.reset_output()?;
        let documents = self.transform_documents()?;
        self.generate_html()?;

        if self.config.open {
            self.open_result();
        }

        Ok(BuildReport {
            documents,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.html_dir.clone(),
        })
    }

    /// Verify both external tools are installed.
    ///
    /// Runs before any filesystem mutation, so a missing tool leaves the
    /// output tree untouched.
    fn check_prerequisites(&self) -> Result<(), BuildError> {
        if !self.generator.exists() {
            return Err(BuildError::MissingDependency {
                tool: self.generator.program().to_string(),
            });
        }

        if !self.converter.exists() {
            return Err(BuildError::MissingDependency {
                tool: self.converter.program().to_string(),
            });
        }

        Ok(())
    }

    /// Wipe the HTML and staging directories and recreate the staging
    /// tutorials subdirectory.
    ///
    /// Deleting an absent directory is not an error, so this is idempotent.
    fn reset_output(&self) -> Result<(), BuildError> {
        tracing::debug!("Resetting output directories");

        remove_dir_all_if_present(&self.config.html_dir)
            .map_err(|e| BuildError::ResetError(e.to_string()))?;
        remove_dir_all_if_present(&self.config.build_dir)
            .map_err(|e| BuildError::ResetError(e.to_string()))?;

        fs::create_dir_all(self.tutorials_dir())
            .map_err(|e| BuildError::ResetError(e.to_string()))?;

        Ok(())
    }

    /// Convert every source document into the staging tree.
    ///
    /// A single failed conversion aborts the build; later documents are not
    /// attempted and the generator is never invoked.
    fn transform_documents(&self) -> Result<usize, BuildError> {
        if !self.config.docs_dir.exists() {
            return Err(BuildError::ScanError(format!(
                "Source directory not found: {}",
                self.config.docs_dir.display()
            )));
        }

        let documents = discover_documents(&self.config.docs_dir)
            .map_err(|e| BuildError::ScanError(e.to_string()))?;

        let tutorials_dir = self.tutorials_dir();

        for doc in &documents {
            tracing::info!("Parsing: {}", doc.path.display());

            let output = doc.output_entry(&tutorials_dir, &self.config.package_name);

            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::StagingError(e.to_string()))?;
            }

            let args = vec![doc.path.clone().into_os_string(), output.into_os_string()];
            self.converter
                .run(&args)
                .map_err(|source| BuildError::ConversionFailure {
                    path: doc.path.display().to_string(),
                    source,
                })?;
        }

        Ok(documents.len())
    }

    /// Run the generator once over the annotated source and staging tree.
    ///
    /// The generator's output streams through to the terminal; it is not
    /// captured or parsed.
    fn generate_html(&self) -> Result<(), BuildError> {
        tracing::info!("Running {}", self.generator.program());

        self.generator
            .run(&self.generator_args())
            .map_err(BuildError::GenerationFailure)
    }

    fn generator_args(&self) -> Vec<OsString> {
        let mut sources = self.config.src_dir.clone().into_os_string();
        sources.push(",");
        sources.push(self.config.build_dir.as_os_str());

        vec![
            "-ti".into(),
            self.config.title.clone().into(),
            "-dn".into(),
            self.config.short_name.clone().into(),
            "-o".into(),
            "HTML:frames:l0l33t".into(),
            "-t".into(),
            self.config.html_dir.clone().into_os_string(),
            "-d".into(),
            sources,
            "-ed".into(),
            EXAMPLES_DIR.into(),
            "-ric".into(),
            README_FILE.into(),
        ]
    }

    /// Open the generated index page in the default viewer. Best effort.
    fn open_result(&self) {
        let index = self.config.html_dir.join("index.html");
        tracing::debug!("Opening {}", index.display());

        let _ = open::that(&index);
    }

    fn tutorials_dir(&self) -> PathBuf {
        self.config.build_dir.join("tutorials")
    }
}

/// Remove a directory tree, treating an already-absent tree as success.
fn remove_dir_all_if_present(dir: &Path) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
