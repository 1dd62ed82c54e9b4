//! Core sorting and searching algorithms.
//!
//! This module implements the two engines the sorted arrays are built on:
//! - **Hybrid sort**: Quicksort with a Lomuto partition for ranges longer than
//!   the threshold, insertion sort for the rest.
//! - **Binary search**: Returns either the index of a matching key or the
//!   insertion point that keeps the slice ordered.
//!
//! Both operate on any slice of [`Keyed`] elements and compare keys only.
//! The main entry points are [`sort`] and [`search`].

use crate::core::{Keyed, Pivot, SortConfig};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use tracing::trace;

/// Sorts `data[lo..hi]` in place by key using the default [`SortConfig`].
///
/// Ranges longer than [`INSERTION_SORT_THRESHOLD`](crate::core::INSERTION_SORT_THRESHOLD)
/// go through [`quicksort`]; shorter ones through [`insertion_sort`]. The sort is
/// not stable.
///
/// # Panics
///
/// Panics if `hi > data.len()`. A range with `lo > hi` trips a debug assertion and
/// is a no-op in release builds. Use [`try_sort`] to get an error instead.
///
/// # Examples
///
/// ```
/// use keyarray::sort;
///
/// let mut data = vec![9u32, 3, 7, 1, 8, 2, 6, 4, 0, 5, 12, 11, 10, 13];
/// let len = data.len();
/// sort(&mut data, 0, len);
///
/// assert_eq!(data, (0..14).collect::<Vec<u32>>());
/// ```
pub fn sort<T: Keyed>(data: &mut [T], lo: usize, hi: usize) {
    sort_with(data, lo, hi, &SortConfig::default());
}

/// Sorts `data[lo..hi]` in place by key with an explicit configuration.
pub fn sort_with<T: Keyed>(data: &mut [T], lo: usize, hi: usize, config: &SortConfig) {
    debug_assert!(lo <= hi, "sort range start {lo} exceeds end {hi}");
    debug_assert!(hi <= data.len(), "sort range end {hi} exceeds length {}", data.len());

    let len = hi.saturating_sub(lo);
    if len > config.threshold {
        trace!(len, pivot = ?config.pivot, "quicksort");
        quicksort_with(data, lo, hi, config.pivot);
        return;
    }
    insertion_sort(data, lo, hi);
}

/// Checked variant of [`sort`].
///
/// Returns [`Error::InvalidRange`] instead of panicking when the range does not fit
/// the slice.
pub fn try_sort<T: Keyed>(data: &mut [T], lo: usize, hi: usize) -> Result<()> {
    if lo > hi || hi > data.len() {
        return Err(Error::InvalidRange {
            lo,
            hi,
            len: data.len(),
        });
    }
    sort(data, lo, hi);
    Ok(())
}

/// Quicksort over `data[lo..hi]` using the first element of each range as pivot.
///
/// Worst case is O(n²) comparisons on presorted input. Recursion always descends
/// into the smaller side and loops on the larger one, so stack depth stays
/// O(log n) even then.
pub fn quicksort<T: Keyed>(data: &mut [T], lo: usize, hi: usize) {
    quicksort_with(data, lo, hi, Pivot::First);
}

fn quicksort_with<T: Keyed>(data: &mut [T], mut lo: usize, mut hi: usize, pivot: Pivot) {
    while lo < hi {
        if pivot == Pivot::MedianOfThree {
            median_to_front(data, lo, hi);
        }
        let p = partition(data, lo, hi);

        if p - lo < hi - (p + 1) {
            quicksort_with(data, lo, p, pivot);
            lo = p + 1;
        } else {
            quicksort_with(data, p + 1, hi, pivot);
            hi = p;
        }
    }
}

/// Lomuto partition of `data[lo..hi]` around `data[lo]`.
///
/// After the call, every element in `data[lo..j]` has a key `<=` the pivot key,
/// every element in `data[j + 1..hi]` has a greater key, and the pivot sits at `j`.
/// Returns `j`.
///
/// Requires `lo < hi`.
pub fn partition<T: Keyed>(data: &mut [T], lo: usize, hi: usize) -> usize {
    debug_assert!(lo < hi, "partition of empty range {lo}..{hi}");

    let x = data[lo].key();
    let mut j = lo;
    for i in lo + 1..hi {
        if data[i].key() <= x {
            j += 1;
            data.swap(j, i);
        }
    }
    data.swap(j, lo);
    j
}

/// Swaps the median of the first, middle and last keys into `data[lo]`.
fn median_to_front<T: Keyed>(data: &mut [T], lo: usize, hi: usize) {
    if hi - lo < 3 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;

    let (a, b, c) = (data[lo].key(), data[mid].key(), data[last].key());
    let median = if (a <= b && b <= c) || (c <= b && b <= a) {
        mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        lo
    } else {
        last
    };
    data.swap(lo, median);
}

/// Adjacent-swap insertion sort over `data[lo..hi]`.
///
/// Elements only move past strictly greater keys, so runs of equal keys keep
/// their relative order.
pub fn insertion_sort<T: Keyed>(data: &mut [T], lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data[j - 1].key() > data[j].key() {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Outcome of a [`search`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Index of the matching element when `found`, otherwise the insertion point:
    /// the leftmost index whose key is `>=` the target.
    pub index: usize,

    /// Whether an element with the target key exists.
    pub found: bool,
}

/// Binary search for `key` in a slice sorted ascending by key.
///
/// # Examples
///
/// ```
/// use keyarray::search;
///
/// let data = [1u32, 3, 5, 8];
///
/// let hit = search(&data, 3);
/// assert!(hit.found);
/// assert_eq!(hit.index, 1);
///
/// let miss = search(&data, 4);
/// assert!(!miss.found);
/// assert_eq!(miss.index, 2);
/// ```
pub fn search<T: Keyed>(data: &[T], key: T::Key) -> SearchResult {
    let mut l = 0;
    let mut right = data.len();
    let mut found = false;

    while !found && l < right {
        let m = l + (right - l) / 2;
        match data[m].key().cmp(&key) {
            Ordering::Equal => {
                found = true;
                right = m;
            }
            Ordering::Less => l = m + 1,
            Ordering::Greater => right = m,
        }
    }

    SearchResult {
        index: right,
        found,
    }
}

/// Verifies that keys in `data` are strictly ascending.
///
/// Reports the first offending pair by the index of its left element.
pub fn check_strictly_ascending<T: Keyed>(data: &[T]) -> Result<()> {
    for (index, pair) in data.windows(2).enumerate() {
        match pair[0].key().cmp(&pair[1].key()) {
            Ordering::Less => {}
            Ordering::Equal => return Err(Error::DuplicateKey { index }),
            Ordering::Greater => return Err(Error::Unsorted { index }),
        }
    }
    Ok(())
}
