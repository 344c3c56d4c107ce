//! Error handling for weekmenu.
//!
//! Library code returns [`WeekmenuError`] (or a module-local error such as
//! [`FrontmatterError`](crate::metadata::FrontmatterError)) wrapped in
//! [`anyhow::Error`]. At the top of the CLI, [`user_friendly_error`] turns any
//! error into an [`ErrorContext`] with details and a suggestion, which `main`
//! prints in colour before exiting with status 1.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for weekmenu operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekmenuError {
    /// The document library directory does not exist
    #[error("Document library not found: {path}")]
    LibraryNotFound {
        /// Path that was looked up
        path: String,
    },

    /// The library path exists but is not a directory
    #[error("Document library is not a directory: {path}")]
    NotADirectory {
        /// Offending path
        path: String,
    },

    /// A file system operation failed
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being attempted
        operation: String,
        /// Path involved
        path: String,
    },

    /// More documents were requested than the library holds
    #[error("Cannot pick {requested} documents, only {available} available")]
    NotEnoughDocuments {
        /// Requested sample size
        requested: usize,
        /// Number of candidate documents
        available: usize,
    },

    /// The configuration file could not be parsed
    #[error("Invalid configuration file {file}")]
    ConfigParseError {
        /// Config file path
        file: String,
        /// Parser message
        reason: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// A [`WeekmenuError`] plus optional details and a suggestion for the user.
///
/// ```rust,no_run
/// use weekmenu::core::{ErrorContext, WeekmenuError};
///
/// let context = ErrorContext::new(WeekmenuError::LibraryNotFound {
///     path: "./recipes".to_string(),
/// })
/// .with_suggestion("Pass --dir with the folder holding your recipes");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: WeekmenuError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error with no details or suggestion.
    #[must_use]
    pub const fn new(error: WeekmenuError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// A [`WeekmenuError`] is found anywhere in the cause chain. A top-level
/// [`std::io::Error`] gets generic advice. Everything else is reported with
/// its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(weekmenu_error) = cause.downcast_ref::<WeekmenuError>() {
            return create_error_context(weekmenu_error.clone());
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(WeekmenuError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the permissions of the document folder and its files")
                .with_details(io_error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(WeekmenuError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(io_error.to_string());
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(WeekmenuError::Other {
        message,
    })
}

fn create_error_context(error: WeekmenuError) -> ErrorContext {
    let (suggestion, details) = match &error {
        WeekmenuError::LibraryNotFound { path } => (
            Some("Pass --dir <folder>, or set `library` in your weekmenu config.toml".to_string()),
            Some(format!("weekmenu reads documents from '{path}', which does not exist")),
        ),

        WeekmenuError::NotADirectory { .. } => (
            Some("Point --dir at the folder containing your documents, not at a single file".to_string()),
            None,
        ),

        WeekmenuError::NotEnoughDocuments { requested, available } => (
            Some(format!("Lower --count to {available} or fewer, or add more documents")),
            Some(format!(
                "Each document is picked at most once, so {requested} picks need at least {requested} documents with valid front matter"
            )),
        ),

        WeekmenuError::ConfigParseError { file, reason } => (
            Some(format!(
                "Fix {file} or remove it to use defaults. Recognized keys are `library`, `extension` and `count`"
            )),
            Some(reason.trim_end().to_string()),
        ),

        WeekmenuError::ConfigError { .. } => (
            Some("Check the values in your weekmenu config.toml and the command-line flags".to_string()),
            None,
        ),

        _ => (None, None),
    };

    let mut context = ErrorContext::new(error);
    context.suggestion = suggestion;
    context.details = details;
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = WeekmenuError::NotEnoughDocuments {
            requested: 7,
            available: 3,
        };
        assert_eq!(error.to_string(), "Cannot pick 7 documents, only 3 available");

        let error = WeekmenuError::LibraryNotFound {
            path: "./recipes".to_string(),
        };
        assert_eq!(error.to_string(), "Document library not found: ./recipes");
    }

    #[test]
    fn test_error_context_display() {
        let context = ErrorContext::new(WeekmenuError::Other {
            message: "boom".to_string(),
        })
        .with_details("while testing")
        .with_suggestion("stop testing");

        assert_eq!(context.to_string(), "boom\nDetails: while testing\nSuggestion: stop testing");
    }

    #[test]
    fn test_user_friendly_not_enough_documents() {
        let error = anyhow::Error::from(WeekmenuError::NotEnoughDocuments {
            requested: 7,
            available: 2,
        });
        let context = user_friendly_error(error);

        assert!(matches!(context.error, WeekmenuError::NotEnoughDocuments { .. }));
        assert!(context.suggestion.unwrap().contains("--count to 2"));
    }

    #[test]
    fn test_user_friendly_finds_error_behind_context() {
        let error = anyhow::Error::from(WeekmenuError::LibraryNotFound {
            path: "missing".to_string(),
        })
        .context("Failed to scan library");
        let context = user_friendly_error(error);

        assert!(matches!(context.error, WeekmenuError::LibraryNotFound { .. }));
        assert!(context.details.unwrap().contains("missing"));
    }

    #[test]
    fn test_user_friendly_generic_error_keeps_chain() {
        let error = anyhow::anyhow!("inner").context("outer");
        let context = user_friendly_error(error);

        let message = context.error.to_string();
        assert!(message.starts_with("outer"));
        assert!(message.contains("1: inner"));
    }

    #[test]
    fn test_user_friendly_config_parse_error_shows_reason() {
        let error = anyhow::Error::from(WeekmenuError::ConfigParseError {
            file: "config.toml".to_string(),
            reason: "invalid type: string \"x\", expected usize\nin `count`\n".to_string(),
        });
        let context = user_friendly_error(error);

        let details = context.details.unwrap();
        assert!(details.contains("`count`"));
        assert!(details.contains("expected usize"));
        assert!(context.suggestion.unwrap().contains("config.toml"));
    }

    #[test]
    fn test_user_friendly_io_error() {
        let error = anyhow::Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        let context = user_friendly_error(error);

        assert!(matches!(context.error, WeekmenuError::FileSystemError { .. }));
        assert!(context.suggestion.unwrap().contains("permissions"));
    }
}
