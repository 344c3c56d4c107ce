//! Extract front-matter metadata from raw document bytes.
//!
//! The format is decided once from the first four bytes of the content:
//!
//! - `---\n` opens a YAML block closed by the next `\n---`
//! - `+++\n` opens a TOML block closed by the next `\n+++`
//!
//! A matching opener commits to its format. If the closing marker is missing
//! the document has no front matter; the other format is never tried.

use std::fmt;

use thiserror::Error;

use super::Metadata;

/// Serialization format of a front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontmatterFormat {
    /// YAML, delimited by `---`.
    Yaml,
    /// TOML, delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// The three-byte delimiter line for this format.
    pub const fn marker(self) -> &'static [u8; 3] {
        match self {
            Self::Yaml => b"---",
            Self::Toml => b"+++",
        }
    }

    /// Detect the format from the opening delimiter.
    ///
    /// Only the first four bytes are examined. Returns `None` when they are
    /// neither `---\n` nor `+++\n`.
    pub fn detect(content: &[u8]) -> Option<Self> {
        [Self::Yaml, Self::Toml].into_iter().find(|format| {
            content.len() >= 4 && &content[..3] == format.marker() && content[3] == b'\n'
        })
    }

    fn decode(self, text: &str) -> Result<Metadata, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for FrontmatterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Why a document yielded no metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    /// No opening delimiter, or an opening delimiter without its closing one.
    #[error("no valid front matter found")]
    NotFound,

    /// The block was found but is not valid for its format.
    #[error("error parsing {format} front matter: {reason}")]
    Parse {
        /// Format implied by the delimiter
        format: FrontmatterFormat,
        /// Decoder message
        reason: String,
    },
}

/// Front-matter extractor.
///
/// Stateless. Every method is a pure function of its input.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract metadata from raw document bytes.
    ///
    /// # Errors
    ///
    /// - [`FrontmatterError::NotFound`] when no complete block starts the content
    /// - [`FrontmatterError::Parse`] when the block is malformed for its format
    pub fn extract(content: &[u8]) -> Result<Metadata, FrontmatterError> {
        let format = FrontmatterFormat::detect(content).ok_or(FrontmatterError::NotFound)?;
        let block = Self::find_block(content, format).ok_or(FrontmatterError::NotFound)?;

        let text = std::str::from_utf8(block).map_err(|e| FrontmatterError::Parse {
            format,
            reason: e.to_string(),
        })?;

        // Both decoders treat an empty document as the zero value
        if text.trim().is_empty() {
            return Ok(Metadata::default());
        }

        format.decode(text).map_err(|reason| FrontmatterError::Parse {
            format,
            reason,
        })
    }

    /// Extract metadata from a string.
    pub fn extract_str(content: &str) -> Result<Metadata, FrontmatterError> {
        Self::extract(content.as_bytes())
    }

    /// Locate the text enclosed by the front-matter delimiters.
    ///
    /// The search for `\n` + marker starts right after the three-byte opener,
    /// so the returned slice keeps the opener's trailing newline and stops
    /// before the closer's leading newline.
    pub fn find_block(content: &[u8], format: FrontmatterFormat) -> Option<&[u8]> {
        let marker = format.marker();
        let rest = content.get(marker.len()..)?;

        let mut closing = Vec::with_capacity(marker.len() + 1);
        closing.push(b'\n');
        closing.extend_from_slice(marker);

        rest.windows(closing.len())
            .position(|window| window == closing.as_slice())
            .map(|end| &rest[..end])
    }
}

/// Shorthand for [`MetadataExtractor::extract`].
pub fn extract(content: &[u8]) -> Result<Metadata, FrontmatterError> {
    MetadataExtractor::extract(content)
}
