//! Lock-guarded sorted array.
//!
//! [`ConcurrentSortedArray`] owns one [`SortedArray`] behind a
//! [`parking_lot::RwLock`]. Lookups share the lock; mutations take it
//! exclusively. Every guard is scoped, so the lock is released on every exit
//! path, including unwinding out of a caller-supplied closure.
//!
//! Values leave the container as clones or by move, never as references into
//! the live storage. The closure-taking methods ([`ascend`], [`read`], [`write`])
//! run while the lock is held; they must not call back into the same container.
//!
//! [`ascend`]: ConcurrentSortedArray::ascend
//! [`read`]: ConcurrentSortedArray::read
//! [`write`]: ConcurrentSortedArray::write

use crate::array::SortedArray;
use crate::core::SortConfig;
use cuneiform::cuneiform;
use parking_lot::RwLock;
use std::fmt;

// Cache-aligned so neighbouring containers don't share a line with this lock.
#[cuneiform]
struct Slot<K, V> {
    lock: RwLock<SortedArray<K, V>>,
}

/// A [`SortedArray`] that many threads can read and write at once.
///
/// All operations are linearizable: each takes the lock for its whole duration.
///
/// # Examples
///
/// ```
/// use keyarray::ConcurrentSortedArray;
/// use std::thread;
///
/// let index = ConcurrentSortedArray::new();
/// thread::scope(|s| {
///     for t in 0..4u32 {
///         let index = &index;
///         s.spawn(move || {
///             for k in 0..100 {
///                 index.insert(t * 100 + k, t);
///             }
///         });
///     }
/// });
///
/// assert_eq!(index.len(), 400);
/// assert_eq!(index.get(250), Some(2));
/// ```
pub struct ConcurrentSortedArray<K, V> {
    slot: Slot<K, V>,
}

impl<K: Ord + Copy, V> ConcurrentSortedArray<K, V> {
    pub fn new() -> Self {
        Self::from_array(SortedArray::new())
    }

    pub fn with_config(config: SortConfig) -> Self {
        Self::from_array(SortedArray::with_config(config))
    }

    /// Builds the container from an unsorted batch, sorting it once.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_array(SortedArray::from_entries(entries))
    }

    fn from_array(array: SortedArray<K, V>) -> Self {
        Self {
            slot: Slot {
                lock: RwLock::new(array),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.slot.lock.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock.read().is_empty()
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.slot.lock.read().contains_key(key)
    }

    /// Inserts or updates `key`, returning the previous value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.slot.lock.write().insert(key, value)
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&self, key: K) -> bool {
        self.slot.lock.write().delete(key)
    }

    pub fn remove(&self, key: K) -> Option<V> {
        self.slot.lock.write().remove(key)
    }

    /// Removes `key` only if `pred` accepts its value. The check and the removal
    /// happen under one exclusive acquisition.
    pub fn remove_if<F>(&self, key: K, pred: F) -> Option<V>
    where
        F: FnOnce(&V) -> bool,
    {
        self.slot.lock.write().remove_if(key, pred)
    }

    /// Replaces the contents with an unsorted batch.
    ///
    /// See [`SortedArray::bulk_load`].
    pub fn bulk_load<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        // Materialize outside the lock; the source iterator may be slow.
        let entries: Vec<(K, V)> = entries.into_iter().collect();
        self.slot.lock.write().bulk_load(entries);
    }

    pub fn clear(&self) {
        self.slot.lock.write().clear();
    }

    /// Visits entries in ascending order under the read lock until `cb`
    /// returns `false`. Returns `true` if every entry was visited.
    pub fn ascend<F>(&self, cb: F) -> bool
    where
        F: FnMut(K, &V) -> bool,
    {
        self.slot.lock.read().ascend(cb)
    }

    /// Like [`ascend`](Self::ascend), restricted to keys in `lo..=hi`.
    pub fn ascend_range<F>(&self, lo: K, hi: K, cb: F) -> bool
    where
        F: FnMut(K, &V) -> bool,
    {
        self.slot.lock.read().ascend_range(lo, hi, cb)
    }

    /// Runs `f` against the array under the shared lock.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&SortedArray<K, V>) -> R,
    {
        f(&self.slot.lock.read())
    }

    /// Runs `f` against the array under the exclusive lock, making a sequence of
    /// mutations atomic with respect to other callers.
    pub fn write<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut SortedArray<K, V>) -> R,
    {
        f(&mut self.slot.lock.write())
    }

    pub fn into_inner(self) -> SortedArray<K, V> {
        self.slot.lock.into_inner()
    }
}

impl<K: Ord + Copy, V: Clone> ConcurrentSortedArray<K, V> {
    /// Returns a copy of the value under `key`.
    pub fn get(&self, key: K) -> Option<V> {
        self.slot.lock.read().get(key).cloned()
    }

    /// Returns the first key from `keys` that is present, with a copy of its value.
    pub fn get_any<I>(&self, keys: I) -> Option<(K, V)>
    where
        I: IntoIterator<Item = K>,
    {
        let array = self.slot.lock.read();
        array.get_any(keys).map(|(key, value)| (key, value.clone()))
    }

    /// Returns the value under `key`, creating it with `f` if absent.
    ///
    /// `f` runs at most once, under the exclusive lock, and only if no other
    /// caller inserted the key first.
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.slot.lock.write().get_or_insert_with(key, f).clone()
    }

    /// Copies every entry out under a single read acquisition.
    pub fn snapshot(&self) -> Vec<(K, V)> {
        self.slot.lock.read().to_vec()
    }

    /// Iterates a snapshot of the entries in ascending key order.
    ///
    /// The snapshot is taken under one read acquisition, so it reflects a single
    /// point in the container's history. Later mutations are not observed.
    pub fn iter(&self) -> std::vec::IntoIter<(K, V)> {
        self.snapshot().into_iter()
    }
}

impl<K: Ord + Copy, V> Default for ConcurrentSortedArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy, V> From<SortedArray<K, V>> for ConcurrentSortedArray<K, V> {
    fn from(array: SortedArray<K, V>) -> Self {
        Self::from_array(array)
    }
}

impl<K: Ord + Copy, V> FromIterator<(K, V)> for ConcurrentSortedArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_array(iter.into_iter().collect())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ConcurrentSortedArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConcurrentSortedArray")
            .field(&*self.slot.lock.read())
            .finish()
    }
}
