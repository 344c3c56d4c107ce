//! Arguments and output shared by the commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::MenuConfig;
use crate::library::{LibraryScan, SkippedDocument, scan_library};

/// Where to find documents. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct LibraryArgs {
    /// Folder containing the documents
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Document file extension
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,
}

impl LibraryArgs {
    /// Folder to scan.
    pub fn library(&self, config: &MenuConfig) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| config.library.clone())
    }

    /// Extension to match.
    pub fn extension(&self, config: &MenuConfig) -> String {
        self.ext.clone().unwrap_or_else(|| config.extension.clone())
    }

    /// Scan the library these arguments point at.
    pub async fn scan(&self, config: &MenuConfig) -> Result<LibraryScan> {
        let library = self.library(config);
        let extension = self.extension(config);

        scan_library(&library, &extension)
            .await
            .with_context(|| format!("Failed to scan library {}", library.display()))
    }
}

/// Lines describing skipped files, one per file.
pub fn format_skipped(skipped: &[SkippedDocument]) -> Vec<String> {
    skipped
        .iter()
        .map(|s| format!("{} {} ({})", "skipped".yellow(), s.path.display(), s.kind))
        .collect()
}

/// Print skipped files to stderr.
pub fn report_skipped(skipped: &[SkippedDocument]) {
    for line in format_skipped(skipped) {
        eprintln!("{line}");
    }
}
