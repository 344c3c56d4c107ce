//! List documents and their tags.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{LibraryArgs, format_skipped};
use crate::config::MenuConfig;
use crate::document::Document;
use crate::library::LibraryScan;

/// List every document with its tags.
#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(flatten)]
    library: LibraryArgs,

    /// Only list documents carrying this tag (repeatable; all must match)
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct SkippedEntry<'a> {
    path: String,
    reason: &'a str,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    documents: &'a [Document],
    skipped: Vec<SkippedEntry<'a>>,
}

impl ListCommand {
    pub async fn execute(self, config: &MenuConfig) -> Result<()> {
        if !matches!(self.format.as_str(), "text" | "json") {
            bail!("Invalid format '{}'. Valid formats are: text, json", self.format);
        }

        let scan = self.library.scan(config).await?.filter_by_tags(&self.tags);

        let output = match self.format.as_str() {
            "json" => render_json(&scan)?,
            _ => render_text(&scan),
        };
        println!("{output}");

        Ok(())
    }
}

fn render_text(scan: &LibraryScan) -> String {
    let mut lines = Vec::new();

    if scan.documents.is_empty() {
        lines.push("No documents found.".to_string());
    } else {
        lines.push(format!("{} ({}):", "Documents".bold(), scan.documents.len()));
        for doc in &scan.documents {
            if doc.tags().is_empty() {
                lines.push(format!("  {}", doc.name));
            } else {
                lines.push(format!("  {} [{}]", doc.name, doc.tags().join(", ").cyan()));
            }
        }
    }

    if !scan.skipped.is_empty() {
        lines.push(String::new());
        lines.extend(format_skipped(&scan.skipped));
    }

    lines.join("\n")
}

fn render_json(scan: &LibraryScan) -> Result<String> {
    let output = ListOutput {
        documents: &scan.documents,
        skipped: scan
            .skipped
            .iter()
            .map(|s| SkippedEntry {
                path: s.path.display().to_string(),
                reason: &s.reason,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{SkipKind, SkippedDocument};
    use crate::metadata::Metadata;
    use std::path::PathBuf;

    fn scan() -> LibraryScan {
        LibraryScan {
            documents: vec![
                Document::new("lib/soup.md", Metadata::with_tags(["dinner", "vegetarian"])),
                Document::new("lib/water.md", Metadata::default()),
            ],
            skipped: vec![SkippedDocument {
                path: PathBuf::from("lib/broken.md"),
                kind: SkipKind::Malformed,
                reason: "error parsing YAML front matter: bad".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let text = render_text(&scan());

        assert!(text.starts_with("Documents (2):"));
        assert!(text.contains("  soup [dinner, vegetarian]"));
        assert!(text.contains("  water\n"));
        assert!(text.ends_with("skipped lib/broken.md (malformed front matter)"));
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&LibraryScan::default()), "No documents found.");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&scan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["documents"][0]["name"], "soup");
        assert_eq!(value["documents"][0]["tags"][1], "vegetarian");
        assert_eq!(value["documents"][1]["tags"].as_array().unwrap().len(), 0);
        assert_eq!(value["skipped"][0]["path"], "lib/broken.md");
    }
}
