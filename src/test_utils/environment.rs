//! Temporary document libraries.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::DocumentFixture;

/// A document folder inside a temporary directory, removed on drop.
///
/// The folder is `<temp>/library`, leaving `<temp>` free for config files.
pub struct TestLibrary {
    temp_dir: TempDir,
    library: PathBuf,
}

impl TestLibrary {
    /// Create an empty library.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let library = temp_dir.path().join("library");
        fs::create_dir_all(&library)?;

        Ok(Self {
            temp_dir,
            library,
        })
    }

    /// Library with `count` YAML recipes named `recipe-01`, `recipe-02`, ...
    pub fn with_recipes(count: usize) -> Result<Self> {
        let library = Self::new()?;
        for i in 1..=count {
            library.add(&DocumentFixture::yaml(&format!("recipe-{i:02}"), &["dinner"]))?;
        }
        Ok(library)
    }

    /// Write a fixture into the library.
    pub fn add(&self, fixture: &DocumentFixture) -> Result<PathBuf> {
        let path = self.library.join(&fixture.file_name);
        fs::write(&path, &fixture.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a file next to (not inside) the library, e.g. a config file.
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// The document folder.
    pub fn path(&self) -> &Path {
        &self.library
    }

    /// The temporary root containing the library.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}
