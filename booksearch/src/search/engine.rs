use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, trace};

use super::binary::{count_binary, count_binary_recursive, find_binary, find_binary_recursive};
use super::linear::{count_linear, find_linear};
use crate::errors::SearchError;
use crate::record::Book;
use crate::results::SearchReport;
use crate::timer::Stopwatch;

/// Search strategy selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[serde(alias = "l")]
    Linear,
    #[serde(alias = "b")]
    Binary,
    #[serde(rename = "recursive", alias = "r")]
    RecursiveBinary,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::RecursiveBinary,
    ];

    /// Maps a prompt answer to an algorithm. Only `l`, `b` and `r` are accepted.
    pub fn from_choice(choice: char) -> Option<Self> {
        match choice {
            'l' => Some(Algorithm::Linear),
            'b' => Some(Algorithm::Binary),
            'r' => Some(Algorithm::RecursiveBinary),
            _ => None,
        }
    }

    pub fn requires_sorted_catalog(&self) -> bool {
        !matches!(self, Algorithm::Linear)
    }

    /// Counts the requests found in `catalog`.
    ///
    /// The binary variants expect `catalog` to be sorted; see [`prepare_catalog`].
    pub fn count_matches(&self, catalog: &[Book], requests: &[Book]) -> usize {
        match self {
            Algorithm::Linear => count_linear(catalog, requests),
            Algorithm::Binary => count_binary(catalog, requests),
            Algorithm::RecursiveBinary => count_binary_recursive(catalog, requests),
        }
    }

    fn find(&self, catalog: &[Book], target: &Book) -> Option<usize> {
        match self {
            Algorithm::Linear => find_linear(catalog, target),
            Algorithm::Binary => find_binary(catalog, target),
            Algorithm::RecursiveBinary => find_binary_recursive(catalog, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
            Algorithm::RecursiveBinary => "recursive binary",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "linear" => Ok(Algorithm::Linear),
            "b" | "binary" => Ok(Algorithm::Binary),
            "r" | "recursive" => Ok(Algorithm::RecursiveBinary),
            other => Err(SearchError::invalid_method(other)),
        }
    }
}

/// Puts the catalog in the order `algorithm` needs
pub fn prepare_catalog(algorithm: Algorithm, catalog: &mut [Book]) {
    if algorithm.requires_sorted_catalog() {
        debug!("Sorting {} catalog records", catalog.len());
        catalog.sort();
    }
}

/// Runs one timed search.
///
/// Sorting happens before the stopwatch starts so only the lookups are timed.
pub fn search(algorithm: Algorithm, catalog: &mut [Book], requests: &[Book]) -> SearchReport {
    info!(
        "Starting {} search: {} requests against {} catalog records",
        algorithm,
        requests.len(),
        catalog.len()
    );

    let mut stopwatch = Stopwatch::new();
    prepare_catalog(algorithm, catalog);
    debug!("Catalog prepared in {:?}", stopwatch.elapsed());
    let catalog: &[Book] = catalog;

    stopwatch.restart();
    let matches = algorithm.count_matches(catalog, requests);
    let elapsed = stopwatch.elapsed();

    if tracing::enabled!(tracing::Level::TRACE) {
        for request in requests {
            match algorithm.find(catalog, request) {
                Some(_) => trace!("Book found: {}", request),
                None => trace!("Book not found: {}", request),
            }
        }
    }

    let report = SearchReport {
        algorithm,
        catalog_size: catalog.len(),
        request_count: requests.len(),
        matches,
        elapsed,
    };
    info!("Search complete. {}", report);
    report
}
