//! # keyarray
//!
//! `keyarray` provides ordered, key-indexed arrays meant to index the children of a
//! radix-tree node by an integer key.
//!
//! It is built from three layers:
//!
//! - **Hybrid sort** ([`sort`]): Lomuto quicksort for ranges longer than
//!   [`INSERTION_SORT_THRESHOLD`](crate::core::INSERTION_SORT_THRESHOLD), insertion sort below it.
//! - **Binary search** ([`search`]): returns the index of a key, or the insertion
//!   point that keeps the slice ordered when the key is absent.
//! - **Sorted arrays**: [`SortedArray`] keeps unique keys strictly ascending across
//!   inserts and deletes; [`ConcurrentSortedArray`] puts one behind a read/write lock.
//!
//! ## Usage
//!
//! ### Sorting any keyed slice
//!
//! The engines work on any slice whose elements implement [`Keyed`]. Unsigned
//! integers are their own key.
//!
//! ```rust
//! use keyarray::{search, sort};
//!
//! let mut data = vec![5u32, 3, 8, 1];
//! sort(&mut data, 0, 4);
//! assert_eq!(data, vec![1, 3, 5, 8]);
//!
//! let hit = search(&data, 3);
//! assert_eq!((hit.index, hit.found), (1, true));
//! ```
//!
//! ### Indexing children by key
//!
//! ```rust
//! use keyarray::prelude::*;
//!
//! let children = new_sorted_array_from([(0x2a_u64, "b"), (0x07, "a"), (0x99, "c")]);
//! assert_eq!(children.get(0x2a), Some(&"b"));
//!
//! let shared = ConcurrentSortedArray::from(children);
//! shared.insert(0x10, "d");
//! assert_eq!(
//!     shared.snapshot(),
//!     vec![(0x07, "a"), (0x10, "d"), (0x2a, "b"), (0x99, "c")]
//! );
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Sort**: O(n log n) on average. With the default
//!   [`Pivot::First`](crate::core::Pivot::First) presorted input costs O(n²) comparisons;
//!   [`Pivot::MedianOfThree`](crate::core::Pivot::MedianOfThree) avoids that case.
//!   Stack depth is O(log n) either way.
//! - **Lookup**: O(log n).
//! - **Insert/Delete**: O(log n) to locate plus O(n) to shift the tail.

pub mod algo;
pub mod array;
pub mod core;
pub mod error;
pub mod sync;

pub use algo::{SearchResult, search, sort, sort_with, try_sort};
pub use array::{SortedArray, new_sorted_array, new_sorted_array_from};
pub use crate::core::{Entry, Keyed};
pub use error::{Error, Result};
pub use sync::ConcurrentSortedArray;

pub mod prelude {
    pub use crate::algo::{search, sort};
    pub use crate::array::{SortedArray, new_sorted_array, new_sorted_array_from};
    pub use crate::core::{Entry, Keyed, Pivot, SortConfig};
    pub use crate::sync::ConcurrentSortedArray;
}
