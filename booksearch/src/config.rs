use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{SearchError, SearchResult};
use crate::parser::{RecordParser, DEFAULT_DELIMITER};
use crate::results::DEFAULT_RESULT_FILE;
use crate::search::Algorithm;

/// Settings for a booksearch run.
///
/// # Configuration Locations
///
/// Files are layered in increasing order of precedence:
/// 1. Global `$CONFIG_DIR/booksearch/config.yaml`
/// 2. Local `.booksearch.yaml` in the current directory
/// 3. Custom config file passed with `--config`
///
/// Command-line arguments override every file.
///
/// # Configuration Format
///
/// ```yaml
/// # Result file used when none is given on the command line
/// result_file: "found.dat"
///
/// # Single character separating id, language and category
/// delimiter: ","
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
///
/// # Search method; when set the interactive prompt is skipped
/// method: "binary"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSearchConfig {
    #[serde(default = "default_result_file")]
    pub result_file: PathBuf,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub method: Option<Algorithm>,
}

fn default_result_file() -> PathBuf {
    PathBuf::from(DEFAULT_RESULT_FILE)
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for BookSearchConfig {
    fn default() -> Self {
        Self {
            result_file: default_result_file(),
            delimiter: default_delimiter(),
            log_level: default_log_level(),
            method: None,
        }
    }
}

impl BookSearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> SearchResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, adding `config_path` as the highest-precedence file.
    ///
    /// An explicitly given file must exist.
    pub fn load_from(config_path: Option<&Path>) -> SearchResult<Self> {
        let mut builder = ConfigBuilder::builder();

        let defaults = [
            dirs::config_dir().map(|p| p.join("booksearch/config.yaml")),
            Some(PathBuf::from(".booksearch.yaml")),
        ];
        for path in defaults.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(SearchError::config_error(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.record_parser()?;
        Ok(config)
    }

    /// Builds the record parser for the configured delimiter
    pub fn record_parser(&self) -> SearchResult<RecordParser> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(delimiter), None) => Ok(RecordParser::new(delimiter)),
            _ => Err(SearchError::config_error(format!(
                "delimiter must be a single character, got {:?}",
                self.delimiter
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = BookSearchConfig::default();
        assert_eq!(config.result_file, PathBuf::from("found.dat"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.method, None);
        assert_eq!(config.record_parser().unwrap().delimiter(), ',');
    }

    #[test]
    fn test_load_custom_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("booksearch.yaml");
        fs::write(
            &path,
            "result_file: out.dat\ndelimiter: \"|\"\nlog_level: debug\nmethod: recursive\n",
        )
        .unwrap();

        let config = BookSearchConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config.result_file, PathBuf::from("out.dat"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.method, Some(Algorithm::RecursiveBinary));
        assert_eq!(config.record_parser().unwrap().delimiter(), '|');
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("booksearch.yaml");
        fs::write(&path, "method: l\n").unwrap();

        let config = BookSearchConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config.method, Some(Algorithm::Linear));
        assert_eq!(config.result_file, PathBuf::from("found.dat"));
        assert_eq!(config.delimiter, ",");
    }

    #[test]
    fn test_rejects_multi_character_delimiter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("booksearch.yaml");
        fs::write(&path, "delimiter: \";;\"\n").unwrap();

        let err = BookSearchConfig::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, SearchError::ConfigError(_)));
    }

    #[test]
    fn test_missing_custom_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = BookSearchConfig::load_from(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, SearchError::ConfigError(_)));
    }
}
