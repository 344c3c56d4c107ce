//! User configuration for weekmenu.
//!
//! Settings live in a TOML file. The first of these that is set wins:
//!
//! 1. `--config <path>` on the command line
//! 2. the `WEEKMENU_CONFIG` environment variable
//! 3. `~/.weekmenu/config.toml`
//!
//! A missing file means defaults. Every key is optional:
//!
//! ```toml
//! # Folder holding the documents
//! library = "~/recipes"
//! # File extension of documents, without the dot
//! extension = "md"
//! # How many documents `weekmenu pick` selects
//! count = 7
//! ```
//!
//! Command-line flags override whatever the file says.
//!
//! A `library` starting with `~` is expanded to the home directory. Any other
//! relative `library` is resolved against the current working directory, not
//! against the directory holding the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::core::WeekmenuError;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "WEEKMENU_CONFIG";

fn default_library() -> PathBuf {
    PathBuf::from("./example_files")
}

fn default_extension() -> String {
    "md".to_string()
}

const fn default_count() -> usize {
    7
}

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Folder holding the documents.
    #[serde(default = "default_library")]
    pub library: PathBuf,

    /// Document file extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Number of documents to pick.
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            extension: default_extension(),
            count: default_count(),
        }
    }
}

impl MenuConfig {
    /// Load from the default location, falling back to defaults when the file
    /// does not exist.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from the default location.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let explicit = path.is_some();
        let path = match path {
            Some(path) => path,
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if path.exists() {
            Self::load_from(&path).await
        } else if explicit {
            Err(WeekmenuError::ConfigError {
                message: format!("config file {} does not exist", path.display()),
            }
            .into())
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| WeekmenuError::ConfigParseError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config.expand_home())
    }

    /// Default config file location: `$WEEKMENU_CONFIG`, else
    /// `~/.weekmenu/config.toml`. `None` when no home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(".weekmenu").join("config.toml"))
    }

    /// Replace a leading `~` in `library` with the home directory.
    fn expand_home(mut self) -> Self {
        if let Ok(rest) = self.library.strip_prefix("~")
            && let Some(home) = dirs::home_dir()
        {
            self.library = home.join(rest);
        }
        self
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(WeekmenuError::ConfigError {
                message: "extension must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.library, PathBuf::from("./example_files"));
        assert_eq!(config.extension, "md");
        assert_eq!(config.count, 7);
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "count = 3\nlibrary = \"/srv/recipes\"\n").unwrap();

        let config = MenuConfig::load_from(&path).await.unwrap();
        assert_eq!(config.count, 3);
        assert_eq!(config.library, PathBuf::from("/srv/recipes"));
        assert_eq!(config.extension, "md");
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "count = \"seven\"\n").unwrap();

        let err = MenuConfig::load_from(&path).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WeekmenuError>(),
            Some(WeekmenuError::ConfigParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = MenuConfig::load_with_optional(Some(temp.path().join("nope.toml"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_var_sets_default_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "extension = \"txt\"\n").unwrap();

        // SAFETY: serialized with the other env-touching tests
        unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
        let config = MenuConfig::load().await;
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        assert_eq!(config.unwrap().extension, "txt");
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_default_file_gives_defaults() {
        let temp = TempDir::new().unwrap();

        // SAFETY: serialized with the other env-touching tests
        unsafe { std::env::set_var(CONFIG_ENV_VAR, temp.path().join("absent.toml")) };
        let config = MenuConfig::load().await;
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };

        assert_eq!(config.unwrap(), MenuConfig::default());
    }

    #[tokio::test]
    async fn test_load_expands_home_in_library() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "library = \"~/recipes\"\n").unwrap();

        let config = MenuConfig::load_from(&path).await.unwrap();
        assert_eq!(config.library, home.join("recipes"));
    }

    #[test]
    fn test_expand_home_leaves_other_paths_alone() {
        let relative = MenuConfig {
            library: PathBuf::from("recipes/~draft"),
            ..MenuConfig::default()
        }
        .expand_home();
        assert_eq!(relative.library, PathBuf::from("recipes/~draft"));

        let named = MenuConfig {
            library: PathBuf::from("~alice/recipes"),
            ..MenuConfig::default()
        }
        .expand_home();
        assert_eq!(named.library, PathBuf::from("~alice/recipes"));
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let config = MenuConfig {
            extension: ".".to_string(),
            ..MenuConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(MenuConfig::default().validate().is_ok());
    }
}
