//! Source document discovery and output path mapping.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// A single `.rst` source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Full path to the source file.
    pub path: PathBuf,
}

impl Document {
    /// Base filename without the `.rst` extension.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Whether this is the root document (`main.rst`), which maps to the
    /// package-level output file instead of a per-document file.
    pub fn is_root(&self) -> bool {
        self.path.file_name().and_then(|n| n.to_str()) == Some("main.rst")
    }

    /// Target path for this document's converted output.
    ///
    /// Documents map flat into `<tutorials>/<package>/<stem>.pkg` regardless
    /// of their subdirectory under the source tree; the root document maps
    /// to `<package>.pkg` instead.
    pub fn output_entry(&self, tutorials_dir: &Path, package: &str) -> PathBuf {
        let package_dir = tutorials_dir.join(package);

        if self.is_root() {
            package_dir.join(format!("{package}.pkg"))
        } else {
            package_dir.join(format!("{}.pkg", self.stem()))
        }
    }
}

/// Find every `.rst` document under the source root.
///
/// Never descends into a directory named `html` (the generated output lives
/// there). Paths are sorted so traversal order is stable run-to-run.
pub fn discover_documents(source_root: &Path) -> Result<Vec<Document>, walkdir::Error> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(source_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_html_dir(e))
    {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "rst" {
            continue;
        }

        documents.push(Document {
            path: path.to_path_buf(),
        });
    }

    documents.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(documents)
}

fn is_html_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == "html"
}
