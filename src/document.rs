//! Documents in the library and the per-file loader.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tokio::fs;

use crate::metadata::{FrontmatterError, Metadata, MetadataExtractor};

/// A document with front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// File name without its extension
    pub name: String,
    /// Where the document was loaded from
    pub path: PathBuf,
    /// Decoded front matter
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document, deriving its name from `path`.
    pub fn new(path: impl Into<PathBuf>, metadata: Metadata) -> Self {
        let path = path.into();
        Self {
            name: document_name(&path),
            path,
            metadata,
        }
    }

    /// Tags declared in the front matter.
    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    /// Whether the document carries `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata.has_tag(tag)
    }
}

/// Failure to load a single document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read
    #[error("error reading file {}: {source}", path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its front matter is missing or malformed
    #[error("error extracting front matter from {}: {source}", path.display())]
    Frontmatter {
        /// File path
        path: PathBuf,
        /// Extraction failure
        #[source]
        source: FrontmatterError,
    },
}

impl DocumentError {
    /// Path of the document that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read {
                path,
                ..
            }
            | Self::Frontmatter {
                path,
                ..
            } => path,
        }
    }
}

/// Derive a document's display name: the file name with its last extension removed.
///
/// `recipes/Lentil soup.md` becomes `Lentil soup`, `notes/archive.tar.gz` becomes
/// `archive.tar`.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read a document from disk and extract its front matter.
pub async fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let name = document_name(path);
    tracing::debug!("Processing file: {}", name);

    let content = fs::read(path).await.map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata =
        MetadataExtractor::extract(&content).map_err(|source| DocumentError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Document {
        name,
        path: path.to_path_buf(),
        metadata,
    })
}
