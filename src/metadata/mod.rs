//! Front-matter metadata carried by library documents.
//!
//! Documents declare their metadata in a block at the very top of the file,
//! either as YAML between `---` lines or as TOML between `+++` lines:
//!
//! ```text
//! ---
//! tags:
//! - dinner
//! - vegetarian
//! ---
//! # Lentil soup
//! ```
//!
//! Only the `tags` key is read, spelled `tags` or `Tags`. Everything else in
//! the block, other spellings included, is ignored.

pub mod extractor;

pub use extractor::{FrontmatterError, FrontmatterFormat, MetadataExtractor, extract};

use serde::{Deserialize, Deserializer, Serialize};

/// Metadata decoded from a document's front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Tags in declaration order. Empty when the key is missing or null.
    #[serde(default, alias = "Tags", deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl Metadata {
    /// Build a record from a list of tags.
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any tag matches `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
