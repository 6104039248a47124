use crate::record::Book;

/// Returns the index of the first catalog entry equal to `target`
pub fn find_linear(catalog: &[Book], target: &Book) -> Option<usize> {
    catalog.iter().position(|book| book == target)
}

/// Counts the requests present in `catalog` by scanning it front to back.
///
/// The catalog may be in any order.
pub fn count_linear(catalog: &[Book], requests: &[Book]) -> usize {
    requests
        .iter()
        .filter(|request| find_linear(catalog, request).is_some())
        .count()
}
