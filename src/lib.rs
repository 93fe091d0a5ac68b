#![no_std]

//! `DynArray`: a generic growable array with positional editing and an in-place quicksort.
//!
//! `DynArray` owns a single contiguous region of slots. Elements can be appended,
//! inserted, replaced and removed by position; the sequence can be truncated and
//! sorted in place. All positional operations are bounds-checked and report
//! failures through [`DynArrayError`] without modifying the array.
//!
//! This crate is `no_std` compatible and only needs the `alloc` crate.
//!
//! # Capacity Policy
//!
//! A new array starts with the requested capacity (default 10). When an insertion
//! finds every slot in use, the elements are moved into a new region twice as large
//! and the old region is released. `clear()` goes back to the default capacity,
//! `split()` keeps the current one.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new(2).unwrap();
//! array.add("a");
//! array.add("b");
//! assert_eq!(array.capacity(), 2);
//!
//! array.add("c");
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.get(2), Ok(&"c"));
//! ```
//!
//! # Positional Editing
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array = DynArray::default();
//! array.add(10);
//! array.add(30);
//!
//! array.insert(1, 20).unwrap();          // [10, 20, 30]
//! assert_eq!(array.set(0, 5), Ok(10));   // [5, 20, 30]
//! assert_eq!(array.remove(1), Ok(20));   // [5, 30]
//! assert_eq!(array.len(), 2);
//!
//! assert_eq!(
//!     array.get(2),
//!     Err(DynArrayError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//!
//! array.split(1).unwrap();               // [5]
//! assert_eq!(array.len(), 1);
//! ```
//!
//! # Sorting
//!
//! `quick_sort()` orders the elements with a caller-supplied comparator, while
//! `is_sorted()` always checks against the natural order of the element type.
//! The two are independent: an array sorted in descending order reports
//! `is_sorted() == false`.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::default();
//! for x in [1, 6, 3, 47, -3, 4, 18, 2, 2, 34] {
//!     array.add(x);
//! }
//!
//! array.quick_sort(Some(i32::cmp)).unwrap();
//! assert!(array.is_sorted());
//! assert_eq!(array.get(0), Ok(&-3));
//! assert_eq!(array.get(9), Ok(&47));
//!
//! array.quick_sort_by(|a, b| b.cmp(a));
//! assert!(!array.is_sorted());
//! ```
//!
//! Element types without a natural order can still be sorted with a comparator:
//!
//! ```
//! # use dynarray::DynArray;
//! struct Point { x: f64 }
//!
//! let mut array = DynArray::default();
//! array.add(Point { x: 2.5 });
//! array.add(Point { x: -1.0 });
//!
//! array.quick_sort_by(|a, b| a.x.total_cmp(&b.x));
//! assert_eq!(array.get(0).unwrap().x, -1.0);
//! ```
//!
//! # List Contract
//!
//! [`IntensiveList`] describes the same operations as a trait, implemented for
//! both `DynArray` and `Vec`, so code can be written against either:
//!
//! ```
//! # use dynarray::{DynArray, IntensiveList};
//! fn fill<L: IntensiveList<u8>>(list: &mut L) {
//!     for x in [3, 1, 2] {
//!         list.add(x);
//!     }
//!     list.quick_sort(Some(u8::cmp)).unwrap();
//! }
//!
//! let mut array = DynArray::default();
//! let mut vec = Vec::new();
//! fill(&mut array);
//! fill(&mut vec);
//! assert_eq!(vec, [1, 2, 3]);
//! assert!(IntensiveList::is_sorted(&array));
//! ```
//!
//! # Thread Safety
//!
//! `DynArray` has no internal synchronization. It is `Send` and `Sync` whenever
//! the element type is; sharing one array between threads for mutation needs an
//! external lock.

extern crate alloc;

mod array;
mod error;
mod list;
mod sort;

// Re-export public types and traits
pub use array::{DynArray, DEFAULT_CAPACITY, GROWTH_FACTOR};
pub use error::DynArrayError;
pub use list::IntensiveList;
