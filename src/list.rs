use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::array::DynArray;
use crate::error::DynArrayError;
use crate::sort;

/// The positional list contract shared by `DynArray` and `Vec`.
///
/// Indexed operations fail with `DynArrayError::IndexOutOfBounds`, while
/// rejected arguments (a missing comparator, a split past the end) fail with
/// `DynArrayError::InvalidArgument`. A failed call leaves the list unchanged.
pub trait IntensiveList<E> {
    /// Number of elements in the list.
    fn size(&self) -> usize;

    /// Appends `element` after the last one.
    fn add(&mut self, element: E);

    /// Inserts `element` at `index`; `index == size()` appends.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > size()`.
    fn add_at(&mut self, index: usize, element: E) -> Result<(), DynArrayError>;

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= size()`.
    fn get(&self, index: usize) -> Result<&E, DynArrayError>;

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= size()`.
    fn set(&mut self, index: usize, element: E) -> Result<E, DynArrayError>;

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= size()`.
    fn remove(&mut self, index: usize) -> Result<E, DynArrayError>;

    /// Removes every element.
    fn clear(&mut self);

    /// Sorts in place with the Lomuto quicksort, ordered by `comparator`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidArgument` if `comparator` is `None`.
    fn quick_sort<F>(&mut self, comparator: Option<F>) -> Result<(), DynArrayError>
    where
        F: FnMut(&E, &E) -> Ordering;

    /// Checks the elements against the natural order of `E`.
    fn is_sorted(&self) -> bool
    where
        E: Ord;

    /// Keeps the first `size` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidArgument` if `size > self.size()`.
    fn split(&mut self, size: usize) -> Result<(), DynArrayError>;
}

impl<E> IntensiveList<E> for DynArray<E> {
    fn size(&self) -> usize {
        self.len()
    }

    fn add(&mut self, element: E) {
        DynArray::add(self, element);
    }

    fn add_at(&mut self, index: usize, element: E) -> Result<(), DynArrayError> {
        self.insert(index, element)
    }

    fn get(&self, index: usize) -> Result<&E, DynArrayError> {
        DynArray::get(self, index)
    }

    fn set(&mut self, index: usize, element: E) -> Result<E, DynArrayError> {
        DynArray::set(self, index, element)
    }

    fn remove(&mut self, index: usize) -> Result<E, DynArrayError> {
        DynArray::remove(self, index)
    }

    fn clear(&mut self) {
        DynArray::clear(self);
    }

    fn quick_sort<F>(&mut self, comparator: Option<F>) -> Result<(), DynArrayError>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        DynArray::quick_sort(self, comparator)
    }

    fn is_sorted(&self) -> bool
    where
        E: Ord,
    {
        DynArray::is_sorted(self)
    }

    fn split(&mut self, size: usize) -> Result<(), DynArrayError> {
        DynArray::split(self, size)
    }
}

impl<E> IntensiveList<E> for Vec<E> {
    fn size(&self) -> usize {
        self.len()
    }

    fn add(&mut self, element: E) {
        self.push(element);
    }

    fn add_at(&mut self, index: usize, element: E) -> Result<(), DynArrayError> {
        if index > self.len() {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        self.insert(index, element);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&E, DynArrayError> {
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }

    fn set(&mut self, index: usize, element: E) -> Result<E, DynArrayError> {
        let length = self.len();
        let slot = self
            .get_mut(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, length })?;
        Ok(core::mem::replace(slot, element))
    }

    fn remove(&mut self, index: usize) -> Result<E, DynArrayError> {
        if index >= self.len() {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        Ok(Vec::remove(self, index))
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn quick_sort<F>(&mut self, comparator: Option<F>) -> Result<(), DynArrayError>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let Some(mut comparator) = comparator else {
            return Err(DynArrayError::InvalidArgument {
                parameter: "comparator",
                reason: "a comparator is required to sort",
            });
        };
        sort::quick_sort(self.as_mut_slice(), &mut comparator);
        Ok(())
    }

    fn is_sorted(&self) -> bool
    where
        E: Ord,
    {
        sort::is_sorted(self.as_slice())
    }

    fn split(&mut self, size: usize) -> Result<(), DynArrayError> {
        if size > self.len() {
            return Err(DynArrayError::InvalidArgument {
                parameter: "size",
                reason: "split size exceeds array length",
            });
        }
        self.truncate(size);
        Ok(())
    }
}
