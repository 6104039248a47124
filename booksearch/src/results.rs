use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::errors::SearchResult;
use crate::search::Algorithm;

/// Default result file when none is given
pub const DEFAULT_RESULT_FILE: &str = "found.dat";

/// Outcome of one timed search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Algorithm that produced the count
    pub algorithm: Algorithm,
    /// Number of catalog records searched
    pub catalog_size: usize,
    /// Number of request records looked up
    pub request_count: usize,
    /// Requests found in the catalog
    pub matches: usize,
    /// Wall time of the lookups only
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }

    /// Overwrites `path` with the decimal match count, without a newline
    pub fn write_count(&self, path: &Path) -> SearchResult<()> {
        let mut file = File::create(path)?;
        write!(file, "{}", self.matches)?;
        debug!("Wrote match count {} to {}", self.matches, path.display());
        Ok(())
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} search found {} of {} requests in {} catalog records ({})",
            self.algorithm,
            self.matches,
            self.request_count,
            self.catalog_size,
            humantime::format_duration(self.elapsed)
        )
    }
}
