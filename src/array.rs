//! Single-threaded sorted array.
//!
//! [`SortedArray`] keeps its entries strictly ascending by key at all times.
//! Point operations locate their slot with [`search`](crate::algo::search);
//! [`SortedArray::bulk_load`] is the only path that runs the sort engine.

use crate::algo::{self, SearchResult};
use crate::core::{Entry, SortConfig};
use crate::error::Result;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Bound, RangeBounds};
use tracing::{debug, trace};

/// Creates an empty [`SortedArray`].
pub fn new_sorted_array<K: Ord + Copy, V>() -> SortedArray<K, V> {
    SortedArray::new()
}

/// Creates a [`SortedArray`] from an unsorted batch of pairs.
///
/// See [`SortedArray::bulk_load`] for how duplicate keys are handled.
pub fn new_sorted_array_from<K, V, I>(entries: I) -> SortedArray<K, V>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (K, V)>,
{
    SortedArray::from_entries(entries)
}

/// An ordered sequence of `(key, value)` entries with unique keys.
///
/// Lookups are O(log n). Inserting or removing shifts the tail of the backing
/// vector, so those are O(n), which is cheap for the small fan-out of a trie node.
/// The backing storage grows by doubling.
///
/// # Examples
///
/// ```
/// use keyarray::SortedArray;
///
/// let mut children = SortedArray::new();
/// for key in [5u32, 3, 8, 1] {
///     children.insert(key, key * 10);
/// }
///
/// assert_eq!(children.keys().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
/// assert_eq!(children.get(3), Some(&30));
///
/// assert!(children.delete(5));
/// assert_eq!(children.get(5), None);
/// ```
#[derive(Clone)]
pub struct SortedArray<K, V> {
    entries: Vec<Entry<K, V>>,
    config: SortConfig,
}

impl<K: Ord + Copy, V> SortedArray<K, V> {
    pub fn new() -> Self {
        Self::with_config(SortConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            config: SortConfig::default(),
        }
    }

    /// Creates an empty array whose [`bulk_load`](Self::bulk_load) sorts with `config`.
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Builds an array from an unsorted batch, sorting it once.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut array = Self::new();
        array.bulk_load(entries);
        array
    }

    /// Wraps a vector that is already strictly ascending by key.
    ///
    /// Nothing is sorted. Returns an error naming the first out-of-order or
    /// duplicate position if the input breaks the ordering.
    pub fn from_sorted(entries: Vec<Entry<K, V>>) -> Result<Self> {
        algo::check_strictly_ascending(&entries)?;
        Ok(Self {
            entries,
            config: SortConfig::default(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    #[inline]
    fn search(&self, key: K) -> SearchResult {
        algo::search(&self.entries, key)
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.search(key).found
    }

    pub fn get(&self, key: K) -> Option<&V> {
        let SearchResult { index, found } = self.search(key);
        found.then(|| &self.entries[index].value)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let SearchResult { index, found } = self.search(key);
        // `bool::then` can't hand a `&mut` borrow out of its closure.
        if found {
            Some(&mut self.entries[index].value)
        } else {
            None
        }
    }

    /// Returns the first key yielded by `keys` that is present, with its value.
    pub fn get_any<I>(&self, keys: I) -> Option<(K, &V)>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .find_map(|key| self.get(key).map(|value| (key, value)))
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is already present its value is replaced in place and the old
    /// value returned; the length does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let SearchResult { index, found } = self.search(key);
        if found {
            return Some(mem::replace(&mut self.entries[index].value, value));
        }
        self.insert_at(index, Entry::new(key, value));
        None
    }

    fn insert_at(&mut self, index: usize, entry: Entry<K, V>) {
        if self.entries.len() == self.entries.capacity() {
            trace!(capacity = self.entries.capacity(), "growing sorted array");
        }
        self.entries.insert(index, entry);
    }

    /// Returns the value under `key`, inserting the result of `f` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let SearchResult { index, found } = self.search(key);
        if !found {
            self.insert_at(index, Entry::new(key, f()));
        }
        &mut self.entries[index].value
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: K) -> bool {
        self.remove(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: K) -> Option<V> {
        let SearchResult { index, found } = self.search(key);
        if !found {
            return None;
        }
        Some(self.entries.remove(index).value)
    }

    /// Removes `key` only if `pred` accepts its current value.
    pub fn remove_if<F>(&mut self, key: K, pred: F) -> Option<V>
    where
        F: FnOnce(&V) -> bool,
    {
        let SearchResult { index, found } = self.search(key);
        if !found || !pred(&self.entries[index].value) {
            return None;
        }
        Some(self.entries.remove(index).value)
    }

    /// Replaces the contents with an unsorted batch and sorts it once.
    ///
    /// When the batch holds the same key more than once exactly one of those
    /// entries is kept; which one is unspecified because the sort is not stable.
    /// Use [`Extend`] for last-write-wins semantics.
    pub fn bulk_load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.clear();
        self.entries
            .extend(entries.into_iter().map(|(key, value)| Entry::new(key, value)));

        let len = self.entries.len();
        algo::sort_with(&mut self.entries, 0, len, &self.config);
        self.entries.dedup_by_key(|entry| entry.key);

        debug!(
            len = self.entries.len(),
            dropped = len - self.entries.len(),
            "bulk loaded sorted array"
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Verifies that entries are strictly ascending by key.
    pub fn check(&self) -> Result<()> {
        algo::check_strictly_ascending(&self.entries)
    }

    pub fn first(&self) -> Option<(K, &V)> {
        self.entries.first().map(|e| (e.key, &e.value))
    }

    pub fn last(&self) -> Option<(K, &V)> {
        self.entries.last().map(|e| (e.key, &e.value))
    }

    /// Entries in ascending key order.
    pub fn as_slice(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = K> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn values_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator + '_ {
        self.entries.iter_mut().map(|e| &mut e.value)
    }

    /// Iterates the entries whose keys fall within `range`.
    ///
    /// ```
    /// use keyarray::SortedArray;
    ///
    /// let array: SortedArray<u32, ()> = (0..10u32).map(|k| (k * 2, ())).collect();
    /// let keys: Vec<u32> = array.range(3..=8).map(|(k, _)| k).collect();
    /// assert_eq!(keys, vec![4, 6, 8]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        let start = match range.start_bound() {
            Bound::Included(&k) => self.search(k).index,
            Bound::Excluded(&k) => {
                let SearchResult { index, found } = self.search(k);
                index + usize::from(found)
            }
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&k) => {
                let SearchResult { index, found } = self.search(k);
                index + usize::from(found)
            }
            Bound::Excluded(&k) => self.search(k).index,
            Bound::Unbounded => self.entries.len(),
        };

        let slice = if start < end {
            &self.entries[start..end]
        } else {
            &[]
        };
        Iter {
            inner: slice.iter(),
        }
    }

    /// Visits entries in ascending order until `cb` returns `false`.
    ///
    /// Returns `true` if every entry was visited.
    pub fn ascend<F>(&self, mut cb: F) -> bool
    where
        F: FnMut(K, &V) -> bool,
    {
        self.iter().all(|(key, value)| cb(key, value))
    }

    /// Like [`ascend`](Self::ascend), restricted to keys in `lo..=hi`.
    pub fn ascend_range<F>(&self, lo: K, hi: K, mut cb: F) -> bool
    where
        F: FnMut(K, &V) -> bool,
    {
        self.range(lo..=hi).all(|(key, value)| cb(key, value))
    }
}

impl<K: Ord + Copy, V: Clone> SortedArray<K, V> {
    /// Copies every entry out as `(key, value)` pairs.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.entries
            .iter()
            .map(|e| (e.key, e.value.clone()))
            .collect()
    }
}

impl<K: Ord + Copy, V> Default for SortedArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for SortedArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for SortedArray<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SortedArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}

impl<K: Ord + Copy, V> Extend<(K, V)> for SortedArray<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord + Copy, V> FromIterator<(K, V)> for SortedArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, K: Ord + Copy, V> IntoIterator for &'a SortedArray<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for SortedArray<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`SortedArray`] in ascending key order.
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Entry<K, V>>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K: Copy, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key, &e.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Copy, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (e.key, &e.value))
    }
}

impl<K: Copy, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Copy, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator over a [`SortedArray`] in ascending key order.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Entry::into_pair)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
