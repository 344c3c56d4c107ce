//! Core types shared across weekmenu.
//!
//! Error handling lives here:
//! - [`WeekmenuError`] enumerates the failures library code reports
//! - [`ErrorContext`] pairs an error with details and a suggestion for CLI users
//! - [`user_friendly_error`] converts any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! ```rust
//! use weekmenu::core::{WeekmenuError, user_friendly_error};
//!
//! let error = anyhow::Error::from(WeekmenuError::NotEnoughDocuments {
//!     requested: 7,
//!     available: 3,
//! });
//! let friendly = user_friendly_error(error);
//! assert!(friendly.suggestion.is_some());
//! ```

pub mod error;

pub use error::{ErrorContext, WeekmenuError, user_friendly_error};
