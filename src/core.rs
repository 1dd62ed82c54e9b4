//! Core traits and types for keyarray.
//!
//! This module defines:
//! - [`Keyed`]: The key projection every sortable element implements.
//! - [`Entry`]: The `(key, value)` pair stored by [`SortedArray`](crate::SortedArray).
//! - [`SortConfig`] and [`Pivot`]: Tuning knobs for the sort engine.

/// Ranges of this length or shorter are sorted with insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 12;

/// A trait for projecting an ordered key out of an element.
///
/// The sort and search engines in [`algo`](crate::algo) work over any slice of
/// `Keyed` elements, comparing only the projected keys.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use keyarray::core::Keyed;
///
/// struct Child {
///     id: u32,
///     name: String,
/// }
///
/// impl Keyed for Child {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait Keyed {
    /// Totally ordered key type.
    type Key: Ord + Copy;

    /// Returns the key of this element.
    fn key(&self) -> Self::Key;
}

/// A single `(key, value)` pair held by a sorted array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K: Ord + Copy, V> Keyed for Entry<K, V> {
    type Key = K;

    #[inline(always)]
    fn key(&self) -> K {
        self.key
    }
}

impl<K: Ord + Copy, V> Keyed for (K, V) {
    type Key = K;

    #[inline(always)]
    fn key(&self) -> K {
        self.0
    }
}

// Bare unsigned integers are their own key.
macro_rules! impl_keyed_identity {
    ($($t:ty),*) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                #[inline(always)]
                fn key(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_keyed_identity!(u8, u16, u32, u64, u128, usize);

/// Pivot selection policy for the quicksort path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pivot {
    /// Use `data[lo]` as the pivot.
    ///
    /// Already-sorted or reverse-sorted ranges longer than the threshold
    /// degrade to O(n²) time and O(n) recursion depth.
    #[default]
    First,

    /// Move the median of `data[lo]`, `data[mid]` and `data[hi - 1]` to `lo`
    /// before partitioning.
    ///
    /// Presorted input stays O(n log n). Adversarial inputs can still force
    /// the quadratic case.
    MedianOfThree,
}

/// Configuration for the hybrid sort.
///
/// ```
/// use keyarray::core::{Pivot, SortConfig};
///
/// let config = SortConfig::default().with_pivot(Pivot::MedianOfThree);
/// assert_eq!(config.threshold, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Ranges longer than this use quicksort; the rest use insertion sort.
    pub threshold: usize,

    /// Pivot selection policy for quicksort.
    pub pivot: Pivot,
}

impl Default for SortConfig {
    #[inline(always)]
    fn default() -> Self {
        Self {
            threshold: INSERTION_SORT_THRESHOLD,
            pivot: Pivot::First,
        }
    }
}

impl SortConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }
}
