//! Catalog search.
//!
//! Three interchangeable strategies count how many request records appear in
//! a catalog:
//!
//! 1. **Linear**: scans the catalog for each request; any catalog order.
//! 2. **Binary**: lower-bound lookup in a sorted catalog.
//! 3. **Recursive binary**: bisection over an inclusive index range in a
//!    sorted catalog.
//!
//! All three report the same count for the same input:
//! ```rust
//! use booksearch::{search, Algorithm, Book};
//!
//! let mut catalog = vec![
//!     Book::new("333", "en", "new"),
//!     Book::new("111", "en", "new"),
//!     Book::new("222", "fr", "used"),
//! ];
//! let requests = vec![Book::new("222", "fr", "used"), Book::new("444", "de", "new")];
//!
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(search(algorithm, &mut catalog, &requests).matches, 1);
//! }
//! ```
pub mod binary;
pub mod engine;
pub mod linear;
pub mod selection;

pub use engine::{prepare_catalog, search, Algorithm};
pub use selection::prompt_for_algorithm;
