//! Comparison, sorting, and selection over specificity triples.
//!
//! Everything here derives from the single total order of
//! [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules):
//! "Specificities are compared by comparing the three components in order."

use std::cmp::Ordering;

use crate::specificity::Specificity;

/// Compare two specificities, higher specificity first.
///
/// Returns [`Ordering::Less`] when `x` is **more** specific than `y` (the
/// sign convention of a descending comparator), [`Ordering::Greater`] when
/// less specific, and [`Ordering::Equal`] when the components match.
#[must_use]
pub fn compare(x: Specificity, y: Specificity) -> Ordering {
    y.cmp(&x)
}

/// True when `x` is strictly more specific than `y`.
#[must_use]
pub fn more_specific_than(x: Specificity, y: Specificity) -> bool {
    compare(x, y) == Ordering::Less
}

/// True when `x` is strictly less specific than `y`.
#[must_use]
pub fn less_specific_than(x: Specificity, y: Specificity) -> bool {
    compare(x, y) == Ordering::Greater
}

/// True when `x` and `y` have equal components.
#[must_use]
pub fn equals(x: Specificity, y: Specificity) -> bool {
    compare(x, y) == Ordering::Equal
}

/// Direction for [`sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Least specific first.
    Ascending,
    /// Most specific first.
    Descending,
}

/// Return a sorted copy of the sequence. The underlying sort is stable, so
/// entries with equal specificity keep their input order.
#[must_use]
pub fn sort(sequence: &[Specificity], order: SortOrder) -> Vec<Specificity> {
    let mut sorted = sequence.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort(),
        SortOrder::Descending => sorted.sort_by(|x, y| compare(*x, *y)),
    }
    sorted
}

/// Sort least specific first.
#[must_use]
pub fn ascending(sequence: &[Specificity]) -> Vec<Specificity> {
    sort(sequence, SortOrder::Ascending)
}

/// Sort most specific first.
#[must_use]
pub fn descending(sequence: &[Specificity]) -> Vec<Specificity> {
    sort(sequence, SortOrder::Descending)
}

/// The most specific entry, or `None` for an empty sequence.
///
/// Ties go to the first-encountered entry (only a strictly more specific
/// candidate replaces the current best), so the result always equals
/// `descending(sequence)` at index 0.
#[must_use]
pub fn highest(sequence: &[Specificity]) -> Option<Specificity> {
    let mut best: Option<Specificity> = None;
    for &candidate in sequence {
        if best.is_none_or(|current| candidate > current) {
            best = Some(candidate);
        }
    }
    best
}

/// The least specific entry, or `None` for an empty sequence.
///
/// Ties go to the first-encountered entry, matching `ascending(sequence)`
/// at index 0.
#[must_use]
pub fn lowest(sequence: &[Specificity]) -> Option<Specificity> {
    let mut best: Option<Specificity> = None;
    for &candidate in sequence {
        if best.is_none_or(|current| candidate < current) {
            best = Some(candidate);
        }
    }
    best
}
