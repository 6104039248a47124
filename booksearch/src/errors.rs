/// Error types for booksearch.
///
/// Loading, selecting and reporting all return [`SearchResult`], so the driver
/// decides how each failure ends the run instead of relying on a catch-all:
/// ```rust,ignore
/// match load_collections(&catalog, &requests, &parser) {
///     Ok((catalog, requests)) => // search,
///     Err(SearchError::Load { .. }) => // report both files and exit 1,
///     Err(e) => // anything else
/// }
/// ```
///
/// Malformed record lines are deliberately absent from this taxonomy: the
/// parser turns them into partially empty records.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while loading, selecting or reporting
#[derive(Error, Debug)]
pub enum SearchError {
    /// Either input file could not be read. The message names both candidates.
    #[error("cannot open file {} or {}", .catalog.display(), .requests.display())]
    Load {
        catalog: PathBuf,
        requests: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no search method selected before end of input")]
    SelectionAborted,
    #[error("Invalid search method: {0}")]
    InvalidMethod(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SearchError {
    pub fn load(
        catalog: impl Into<PathBuf>,
        requests: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Load {
            catalog: catalog.into(),
            requests: requests.into(),
            source,
        }
    }

    pub fn invalid_method(method: impl Into<String>) -> Self {
        Self::InvalidMethod(method.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
