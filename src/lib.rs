//! weekmenu - pick a random weekly menu from a folder of tagged documents.
//!
//! Documents are text files (usually markdown recipes) that declare metadata
//! in a front-matter block at the very top:
//!
//! ```text
//! ---                              +++
//! tags:                            tags = ["dinner", "soup"]
//! - dinner                         +++
//! - soup
//! ---
//! ```
//!
//! # Modules
//!
//! - [`metadata`] - Front-matter detection and decoding (YAML `---`, TOML `+++`)
//! - [`document`] - Document model and per-file loader
//! - [`library`] - Directory listing and batch loading with per-file skip reporting
//! - [`sampling`] - Unbiased random selection with an injected random source
//! - [`config`] - User configuration file
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error formatting
//!
//! # Example
//!
//! ```rust
//! use weekmenu::metadata::MetadataExtractor;
//!
//! let metadata = MetadataExtractor::extract(b"---\ntags:\n- a\n- b\n---\n").unwrap();
//! assert_eq!(metadata.tags, vec!["a", "b"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod library;
pub mod metadata;
pub mod sampling;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
