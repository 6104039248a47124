use std::cmp::Ordering;
use std::fmt;

/// Classification of a book's category string.
///
/// The variant order is the sort priority: `new` books sort before `used`
/// ones, and every other category sorts after both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    New,
    Used,
    Other,
}

impl Category {
    /// Classifies a raw category string. Matching is exact and case-sensitive.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "new" => Category::New,
            "used" => Category::Used,
            _ => Category::Other,
        }
    }
}

/// A single catalog or request entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Book {
    id: String,
    language: String,
    category: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        language: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            category: category.into(),
        }
    }

    /// The opaque identifier, usually an ISBN
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn category_kind(&self) -> Category {
        Category::classify(&self.category)
    }
}

/// Orders by id, then category priority, then language.
///
/// Two distinct categories of kind [`Category::Other`] compare
/// lexicographically before the language is consulted, so `cmp` returns
/// `Equal` exactly when all three fields match.
impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.category_kind().cmp(&other.category_kind()))
            .then_with(|| self.category.cmp(&other.category))
            .then_with(|| self.language.cmp(&other.language))
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ISBN: {} Language: {} Type: {}",
            self.id, self.language, self.category
        )
    }
}
