use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::error::DynArrayError;
use crate::sort;

/// Capacity of a freshly created or cleared `DynArray`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor by which the capacity grows when an insertion finds the array full.
pub const GROWTH_FACTOR: usize = 2;

/// A growable array with positional editing and an in-place quicksort.
///
/// Storage is a single owned region of `capacity` slots; the first `len()`
/// slots hold the elements in sequence order and the rest are empty. When an
/// insertion finds every slot in use, the region is replaced by one twice as
/// large.
#[derive(Debug)]
pub struct DynArray<E> {
    items: Vec<E>,
    capacity: usize,
}

impl<E> DynArray<E> {
    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, DynArrayError> {
        if capacity == 0 {
            return Err(DynArrayError::InvalidArgument {
                parameter: "capacity",
                reason: "initial capacity must be positive",
            });
        }

        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates an empty array with the default capacity (10).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots, always at least `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_bounds(&self, index: usize) -> Result<(), DynArrayError> {
        if index >= self.items.len() {
            Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Makes room for one more element, moving the contents into a region of
    /// `GROWTH_FACTOR * capacity` slots when every slot is taken.
    fn ensure_capacity(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }

        let new_capacity = self.capacity.saturating_mul(GROWTH_FACTOR);
        log::trace!(
            "DynArray grows from {} to {} slots",
            self.capacity,
            new_capacity
        );

        let mut grown = Vec::with_capacity(new_capacity);
        grown.append(&mut self.items);
        self.items = grown;
        self.capacity = new_capacity;
    }

    /// Appends an element after the last one.
    pub fn add(&mut self, element: E) {
        self.ensure_capacity();
        self.items.push(element);
    }

    /// Inserts an element at `index`, shifting the elements from `index`
    /// onwards one position to the right.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > len()`.
    pub fn insert(&mut self, index: usize, element: E) -> Result<(), DynArrayError> {
        if index > self.items.len() {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            });
        }

        self.ensure_capacity();
        self.items.insert(index, element);
        Ok(())
    }

    /// Gets the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&E, DynArrayError> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// Replaces the element at `index` and returns the one it displaced.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn set(&mut self, index: usize, element: E) -> Result<E, DynArrayError> {
        self.check_bounds(index)?;
        Ok(core::mem::replace(&mut self.items[index], element))
    }

    /// Removes and returns the element at `index`, shifting the elements
    /// after it one position to the left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<E, DynArrayError> {
        self.check_bounds(index)?;
        Ok(self.items.remove(index))
    }

    /// Drops every element and starts over with a fresh region of the
    /// default capacity. The previous capacity is not kept.
    pub fn clear(&mut self) {
        log::debug!(
            "DynArray cleared: {} elements dropped, capacity {} reset to {}",
            self.items.len(),
            self.capacity,
            DEFAULT_CAPACITY
        );
        self.items = Vec::with_capacity(DEFAULT_CAPACITY);
        self.capacity = DEFAULT_CAPACITY;
    }

    /// Keeps the first `size` elements and drops the rest. The capacity is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidArgument` if `size > len()`.
    pub fn split(&mut self, size: usize) -> Result<(), DynArrayError> {
        if size > self.items.len() {
            return Err(DynArrayError::InvalidArgument {
                parameter: "size",
                reason: "split size exceeds array length",
            });
        }

        log::debug!("DynArray split from {} to {} elements", self.items.len(), size);
        self.items.truncate(size);
        Ok(())
    }

    /// Sorts the elements in place with the Lomuto quicksort, ordering them
    /// by `comparator`. The sort is unstable.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidArgument` if `comparator` is `None`;
    /// the elements are left untouched.
    pub fn quick_sort<F>(&mut self, comparator: Option<F>) -> Result<(), DynArrayError>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let Some(comparator) = comparator else {
            return Err(DynArrayError::InvalidArgument {
                parameter: "comparator",
                reason: "a comparator is required to sort",
            });
        };

        self.quick_sort_by(comparator);
        Ok(())
    }

    /// Sorts the elements in place with the Lomuto quicksort, ordering them
    /// by `compare`. The sort is unstable.
    pub fn quick_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        log::debug!("DynArray quicksort over {} elements", self.items.len());
        sort::quick_sort(&mut self.items, &mut compare);
    }
}

impl<E: Ord> DynArray<E> {
    /// Checks that no element is greater than its successor under the
    /// natural order of `E`, regardless of the comparator last used to sort.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        sort::is_sorted(&self.items)
    }
}

impl<E: Clone> Clone for DynArray<E> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<E> Default for DynArray<E> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<E: fmt::Display> fmt::Display for DynArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynArray{{elements=[")?;
        for (i, element) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "], len={}, capacity={}}}", self.items.len(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_initialization() {
        let array: DynArray<i32> = DynArray::new(4).unwrap();

        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 4);

        let array: DynArray<i32> = DynArray::default();
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: Result<DynArray<i32>, _> = DynArray::new(0);
        assert!(matches!(
            result,
            Err(DynArrayError::InvalidArgument {
                parameter: "capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_capacity_doubles_when_full() {
        let mut array = DynArray::new(2).unwrap();

        array.add(1);
        array.add(2);
        assert_eq!(array.capacity(), 2);

        array.add(3);
        assert_eq!(array.capacity(), 4);
        assert!(array.items.capacity() >= 4);

        array.insert(0, 0).unwrap();
        assert_eq!(array.capacity(), 4);

        array.insert(2, 9).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.len(), 5);
    }

    #[test]
    fn test_storage_never_smaller_than_capacity() {
        let mut array = DynArray::new(1).unwrap();

        for i in 0..100 {
            array.add(i);
            assert!(array.len() <= array.capacity());
            assert!(array.items.capacity() >= array.capacity());
        }
        assert_eq!(array.capacity(), 128);
    }

    #[test]
    fn test_clear_resets_capacity() {
        let mut array = DynArray::new(3).unwrap();
        for i in 0..7 {
            array.add(i);
        }
        assert_eq!(array.capacity(), 12);

        array.clear();

        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_split_keeps_capacity() {
        let mut array = DynArray::new(2).unwrap();
        for i in 0..5 {
            array.add(i);
        }
        assert_eq!(array.capacity(), 8);

        array.split(1).unwrap();

        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut array = DynArray::new(6).unwrap();
        array.add(1);

        let copy = array.clone();

        assert_eq!(copy.capacity(), 6);
        assert!(copy.items.capacity() >= 6);
        assert_eq!(copy.get(0), Ok(&1));
    }

    #[test]
    fn test_display() {
        let mut array: DynArray<i32> = DynArray::default();
        assert_eq!(
            format!("{array}"),
            "DynArray{elements=[], len=0, capacity=10}"
        );

        array.add(3);
        array.add(-1);
        assert_eq!(
            format!("{array}"),
            "DynArray{elements=[3, -1], len=2, capacity=10}"
        );
    }
}
