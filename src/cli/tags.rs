//! Show tag usage across the library.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;

use super::common::{LibraryArgs, report_skipped};
use crate::config::MenuConfig;
use crate::document::Document;

/// Count how many documents carry each tag.
#[derive(Args, Debug)]
pub struct TagsCommand {
    #[command(flatten)]
    library: LibraryArgs,
}

impl TagsCommand {
    pub async fn execute(self, config: &MenuConfig) -> Result<()> {
        let scan = self.library.scan(config).await?;
        report_skipped(&scan.skipped);

        let counts = tag_counts(&scan.documents);
        if counts.is_empty() {
            println!("No tags found.");
            return Ok(());
        }

        let width = counts.iter().map(|(_, n)| n.to_string().len()).max().unwrap_or(1);
        for (tag, count) in counts {
            println!("{count:>width$}  {tag}");
        }
        Ok(())
    }
}

/// Tags with the number of documents using them, most used first, ties by name.
///
/// Tags are compared case-sensitively; a document listing a tag twice counts once.
fn tag_counts(documents: &[Document]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        let mut seen: Vec<&str> = Vec::new();
        for tag in doc.tags() {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
                *counts.entry(tag).or_default() += 1;
            }
        }
    }

    let mut counts: Vec<(String, usize)> =
        counts.into_iter().map(|(tag, n)| (tag.to_string(), n)).collect();
    // Stable sort keeps the BTreeMap's alphabetical order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
