//! Pick a random selection of documents.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{LibraryArgs, report_skipped};
use crate::config::MenuConfig;
use crate::document::Document;
use crate::sampling::{rng_from_seed, select_random};

/// Pick a random selection of documents.
///
/// ```bash
/// weekmenu pick
/// weekmenu pick -n 5 --tag dinner --seed 42
/// ```
#[derive(Args, Debug)]
pub struct PickCommand {
    #[command(flatten)]
    library: LibraryArgs,

    /// Number of documents to pick (default: `count` from config, else 7)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for a reproducible selection
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only pick documents carrying this tag (repeatable; all must match)
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,
}

impl PickCommand {
    pub async fn execute(self, config: &MenuConfig) -> Result<()> {
        let scan = self.library.scan(config).await?;
        report_skipped(&scan.skipped);

        println!("Documents found: {}", scan.documents.len());

        let scan = scan.filter_by_tags(&self.tags);
        if !self.tags.is_empty() {
            println!("Matching tags {}: {}", self.tags.join(", "), scan.documents.len());
        }

        let count = self.count.unwrap_or(config.count);
        let mut rng = rng_from_seed(self.seed);
        let menu = select_random(&scan.documents, count, &mut rng)?;

        tracing::debug!("Picked {} of {} documents", menu.len(), scan.documents.len());

        println!("{}", "Your weekly menu:".bold());
        for line in format_menu(&menu) {
            println!("{line}");
        }

        Ok(())
    }
}

/// Numbered menu lines, starting at 1.
fn format_menu(menu: &[Document]) -> Vec<String> {
    menu.iter().enumerate().map(|(i, doc)| format!("{}: {}", i + 1, doc.name)).collect()
}
