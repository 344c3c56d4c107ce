//! Test utilities for weekmenu
//!
//! Helpers for building throwaway document libraries and for enabling
//! logging inside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use weekmenu::test_utils::{DocumentFixture, TestLibrary};
//!
//! let library = TestLibrary::new().unwrap();
//! library.add(&DocumentFixture::yaml("soup", &["dinner"])).unwrap();
//! library.add(&DocumentFixture::plain("notes")).unwrap();
//! assert!(library.path().join("soup.md").exists());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestLibrary;
pub use fixtures::DocumentFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` if given, otherwise `RUST_LOG`. Does nothing when neither is
/// set. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
