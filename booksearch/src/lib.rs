pub mod config;
pub mod errors;
pub mod parser;
pub mod record;
pub mod results;
pub mod search;
pub mod timer;

pub use config::BookSearchConfig;
pub use errors::{SearchError, SearchResult};
pub use parser::{load_collections, RecordParser};
pub use record::{Book, Category};
pub use results::SearchReport;
pub use search::{prompt_for_algorithm, search, Algorithm};
pub use timer::Stopwatch;
