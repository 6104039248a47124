use std::cmp::Ordering;

use crate::record::Book;

/// First position whose record is not less than `target`.
///
/// Returns `catalog.len()` when every record is less than `target`.
pub fn lower_bound(catalog: &[Book], target: &Book) -> usize {
    catalog.partition_point(|book| book < target)
}

/// Iterative lookup in a sorted catalog
pub fn find_binary(catalog: &[Book], target: &Book) -> Option<usize> {
    let index = lower_bound(catalog, target);
    match catalog.get(index) {
        Some(book) if book == target => Some(index),
        _ => None,
    }
}

/// Recursive lookup in a sorted catalog.
///
/// Bisects the inclusive range `[0, len - 1]`. The bounds are signed so an
/// empty catalog starts as the empty range `[0, -1]`.
pub fn find_binary_recursive(catalog: &[Book], target: &Book) -> Option<usize> {
    let right = catalog.len() as isize - 1;
    bisect(catalog, target, 0, right)
}

fn bisect(catalog: &[Book], target: &Book, left: isize, right: isize) -> Option<usize> {
    if left > right {
        return None;
    }
    let mid = left + (right - left) / 2;
    // 0 <= left <= mid <= right < len
    let index = mid as usize;
    match catalog[index].cmp(target) {
        Ordering::Equal => Some(index),
        Ordering::Less => bisect(catalog, target, mid + 1, right),
        Ordering::Greater => bisect(catalog, target, left, mid - 1),
    }
}

/// Counts requests found in a sorted catalog with [`find_binary`]
pub fn count_binary(catalog: &[Book], requests: &[Book]) -> usize {
    requests
        .iter()
        .filter(|request| find_binary(catalog, request).is_some())
        .count()
}

/// Counts requests found in a sorted catalog with [`find_binary_recursive`]
pub fn count_binary_recursive(catalog: &[Book], requests: &[Book]) -> usize {
    requests
        .iter()
        .filter(|request| find_binary_recursive(catalog, request).is_some())
        .count()
}
