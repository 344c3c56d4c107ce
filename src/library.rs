//! Scan a folder of documents.
//!
//! [`list_documents`] finds candidate files directly inside a folder (no
//! recursion), and [`scan_library`] loads all of them. A file that cannot be
//! read or has no usable front matter is recorded in
//! [`LibraryScan::skipped`] and the scan carries on with the rest.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::future::join_all;
use tokio::fs;

use crate::core::WeekmenuError;
use crate::document::{Document, DocumentError, load_document};
use crate::metadata::FrontmatterError;

/// Why a file was left out of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipKind {
    /// No opening delimiter, or no closing delimiter
    NoFrontmatter,
    /// Front matter present but not valid for its format
    Malformed,
    /// The file could not be read
    Unreadable,
}

impl fmt::Display for SkipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrontmatter => write!(f, "no front matter"),
            Self::Malformed => write!(f, "malformed front matter"),
            Self::Unreadable => write!(f, "unreadable"),
        }
    }
}

/// A file that was left out of the library, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// File path
    pub path: PathBuf,
    /// Failure category
    pub kind: SkipKind,
    /// Full error message
    pub reason: String,
}

impl From<DocumentError> for SkippedDocument {
    fn from(error: DocumentError) -> Self {
        let kind = match &error {
            DocumentError::Read {
                ..
            } => SkipKind::Unreadable,
            DocumentError::Frontmatter {
                source: FrontmatterError::NotFound,
                ..
            } => SkipKind::NoFrontmatter,
            DocumentError::Frontmatter {
                source: FrontmatterError::Parse {
                    ..
                },
                ..
            } => SkipKind::Malformed,
        };

        Self {
            path: error.path().to_path_buf(),
            kind,
            reason: error.to_string(),
        }
    }
}

/// Result of scanning a library folder.
#[derive(Debug, Clone, Default)]
pub struct LibraryScan {
    /// Documents with valid front matter, in path order
    pub documents: Vec<Document>,
    /// Files that were left out, in path order
    pub skipped: Vec<SkippedDocument>,
}

impl LibraryScan {
    /// Keep only documents carrying every tag in `tags` (ASCII case-insensitive).
    ///
    /// An empty `tags` keeps everything.
    #[must_use]
    pub fn filter_by_tags(mut self, tags: &[String]) -> Self {
        if !tags.is_empty() {
            self.documents.retain(|doc| tags.iter().all(|tag| doc.has_tag(tag)));
        }
        self
    }

    /// Total number of files looked at.
    pub fn files_seen(&self) -> usize {
        self.documents.len() + self.skipped.len()
    }
}

/// Whether `path` has exactly the extension `extension` (given without a dot).
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension.trim_start_matches('.'))
}

/// List the files in `dir` with the given extension, sorted by path.
///
/// Subdirectories are neither returned nor descended into.
pub async fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = match fs::metadata(dir).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(WeekmenuError::LibraryNotFound {
                path: dir.display().to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read library directory: {}", dir.display()));
        }
    };

    if !metadata.is_dir() {
        return Err(WeekmenuError::NotADirectory {
            path: dir.display().to_string(),
        }
        .into());
    }

    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read library directory: {}", dir.display()))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read entry in {}", dir.display()))?
    {
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        let path = entry.path();

        // Follow symlinks to files
        let is_file = if file_type.is_symlink() {
            fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };

        if is_file && has_extension(&path, extension) {
            paths.push(path);
        }
    }

    paths.sort();
    tracing::debug!("Found {} candidate files in {}", paths.len(), dir.display());
    Ok(paths)
}

/// Load every document in `dir` with the given extension.
///
/// Files are loaded concurrently; results keep path order. Per-file failures
/// never abort the scan.
pub async fn scan_library(dir: &Path, extension: &str) -> Result<LibraryScan> {
    let paths = list_documents(dir, extension).await?;

    let results = join_all(paths.iter().map(|path| load_document(path))).await;

    let mut scan = LibraryScan::default();
    for result in results {
        match result {
            Ok(document) => scan.documents.push(document),
            Err(error) => {
                tracing::debug!("Skipping {}", error);
                scan.skipped.push(SkippedDocument::from(error));
            }
        }
    }

    tracing::info!(
        "Loaded {} documents from {} ({} skipped)",
        scan.documents.len(),
        dir.display(),
        scan.skipped.len()
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_list_documents_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.md", "");
        write(temp.path(), "a.md", "");
        write(temp.path(), "notes.txt", "");
        write(temp.path(), "c.markdown", "");
        std::fs::create_dir(temp.path().join("nested.md")).unwrap();
        write(&temp.path().join("nested.md"), "inner.md", "");

        let paths = list_documents(temp.path(), "md").await.unwrap();
        let names: Vec<_> =
            paths.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[tokio::test]
    async fn test_list_documents_accepts_dotted_extension() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "");

        let paths = list_documents(temp.path(), ".md").await.unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[tokio::test]
    async fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = list_documents(&temp.path().join("missing"), "md").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WeekmenuError>(),
            Some(WeekmenuError::LibraryNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_file_instead_of_directory() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "");
        let err = list_documents(&temp.path().join("a.md"), "md").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WeekmenuError>(),
            Some(WeekmenuError::NotADirectory { .. })
        ));
    }

    #[tokio::test]
    async fn test_scan_skips_bad_files_and_continues() {
        crate::test_utils::init_test_logging(None);
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a-soup.md", "---\ntags:\n- dinner\n---\n# Soup\n");
        write(temp.path(), "b-plain.md", "# No front matter\n");
        write(temp.path(), "c-broken.md", "---\ntags: 5\n---\n");
        write(temp.path(), "d-toast.md", "+++\ntags = [\"breakfast\"]\n+++\n");

        let scan = scan_library(temp.path(), "md").await.unwrap();

        let names: Vec<_> = scan.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a-soup", "d-toast"]);

        let kinds: Vec<_> = scan.skipped.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SkipKind::NoFrontmatter, SkipKind::Malformed]);
        assert!(scan.skipped[1].reason.contains("error parsing YAML front matter"));
        assert_eq!(scan.files_seen(), 4);
    }

    #[tokio::test]
    async fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        let scan = scan_library(temp.path(), "md").await.unwrap();
        assert!(scan.documents.is_empty());
        assert!(scan.skipped.is_empty());
    }

    #[test]
    fn test_filter_by_tags_requires_all() {
        let scan = LibraryScan {
            documents: vec![
                Document::new("soup.md", Metadata::with_tags(["dinner", "vegetarian"])),
                Document::new("steak.md", Metadata::with_tags(["Dinner"])),
                Document::new("toast.md", Metadata::with_tags(["breakfast"])),
            ],
            skipped: Vec::new(),
        };

        let dinner = scan.clone().filter_by_tags(&["dinner".to_string()]);
        assert_eq!(dinner.documents.len(), 2);

        let veggie_dinner =
            scan.clone().filter_by_tags(&["dinner".to_string(), "vegetarian".to_string()]);
        assert_eq!(veggie_dinner.documents.len(), 1);
        assert_eq!(veggie_dinner.documents[0].name, "soup");

        assert_eq!(scan.filter_by_tags(&[]).documents.len(), 3);
    }

    #[test]
    fn test_skipped_document_from_read_error() {
        let error = DocumentError::Read {
            path: PathBuf::from("gone.md"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let skipped = SkippedDocument::from(error);
        assert_eq!(skipped.kind, SkipKind::Unreadable);
        assert_eq!(skipped.path, PathBuf::from("gone.md"));
    }
}
