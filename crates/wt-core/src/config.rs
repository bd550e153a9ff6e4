//! Configuration structures for the wordtally word counter.
//!
//! This module provides configuration types for every component:
//!
//! - [`CountConfig`] - Tokenizing and parallelism settings
//! - [`WalkConfig`] - Which files to pick up when a directory is counted
//! - [`DisplayConfig`] - How ranked results are presented
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and deserialize with
//! `#[serde(default)]`, so a configuration file only needs the keys it
//! changes.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{LineEnding, TextFilter};

/// Configuration for word counting.
///
/// # Examples
///
/// ```
/// use wt_core::{CountConfig, LineEnding, TextFilter};
///
/// let config = CountConfig::default();
/// assert_eq!(config.filter, TextFilter::Verbatim);
/// assert_eq!(config.line_ending, LineEnding::Any);
/// assert!(config.max_parallel_jobs.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    /// Character filtering applied to each line before tokenizing.
    pub filter: TextFilter,

    /// How in-memory text is split into lines.
    ///
    /// Files are always read with [`BufRead::lines`](std::io::BufRead::lines).
    pub line_ending: LineEnding,

    /// Maximum number of files counted in parallel.
    /// `None` means use all available CPU cores.
    pub max_parallel_jobs: Option<usize>,
}

/// Configuration for directory traversal.
///
/// # Examples
///
/// ```
/// use wt_core::WalkConfig;
///
/// let config = WalkConfig::default();
/// assert_eq!(config.extensions, vec!["txt", "md"]);
/// assert!(!config.follow_links);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// File extensions (without the leading dot) counted inside directories.
    ///
    /// An empty list accepts every file. Paths named explicitly are always
    /// counted regardless of extension.
    pub extensions: Vec<String>,

    /// Directory names skipped in addition to the built-in list.
    pub skip_dirs: Vec<String>,

    /// Whether to follow symbolic links.
    pub follow_links: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_owned(), "md".to_owned()],
            skip_dirs: Vec::new(),
            follow_links: false,
        }
    }
}

/// Configuration for ranked output.
///
/// # Examples
///
/// ```
/// use wt_core::DisplayConfig;
///
/// assert_eq!(DisplayConfig::default().top, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of ranked words to show. `0` shows all of them.
    pub top: usize,
}

/// Root configuration for wordtally.
///
/// # Examples
///
/// ```
/// use wt_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"display": {"top": 10}}"#).unwrap();
/// assert_eq!(config.display.top, 10);
/// assert_eq!(config.walk.extensions, vec!["txt", "md"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Counting configuration.
    pub count: CountConfig,

    /// Directory traversal configuration.
    pub walk: WalkConfig,

    /// Output configuration.
    pub display: DisplayConfig,
}

impl Config {
    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist,
    /// [`ConfigError::Io`] or [`ConfigError::Parse`] if it cannot be read,
    /// and [`ConfigError::InvalidOption`] if validation fails.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for a zero job count or an
    /// empty or dotted extension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count.max_parallel_jobs == Some(0) {
            return Err(ConfigError::invalid_option(
                "count.max_parallel_jobs",
                "must be at least 1",
            ));
        }

        for ext in &self.walk.extensions {
            if ext.is_empty() {
                return Err(ConfigError::invalid_option(
                    "walk.extensions",
                    "extensions must not be empty",
                ));
            }
            if ext.starts_with('.') {
                return Err(ConfigError::invalid_option(
                    "walk.extensions",
                    format!("'{ext}' must be given without the leading dot"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.count.filter, TextFilter::Verbatim);
        assert_eq!(config.walk.extensions, vec!["txt", "md"]);
        assert_eq!(config.display.top, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"count": {"filter": "strip_symbols"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.count.filter, TextFilter::StripSymbols);
        // Other fields should have defaults
        assert_eq!(config.count.line_ending, LineEnding::Any);
        assert_eq!(config.walk.extensions, vec!["txt", "md"]);
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let mut config = Config::default();
        config.count.max_parallel_jobs = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("count.max_parallel_jobs"));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let mut config = Config::default();
        config.walk.extensions = vec![".txt".to_owned()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Utf8Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordtally.json");
        std::fs::write(&path, r#"{"display": {"top": 25}, "walk": {"extensions": []}}"#)
            .unwrap();

        let path = Utf8Path::from_path(&path).unwrap();
        let config = Config::load(path).unwrap();
        assert_eq!(config.display.top, 25);
        assert!(config.walk.extensions.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ display: ").unwrap();

        let path = Utf8Path::from_path(&path).unwrap();
        assert!(matches!(Config::load(path), Err(ConfigError::Parse(_))));
    }
}
