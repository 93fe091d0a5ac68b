//! Lomuto quicksort and the natural-order sortedness check.

use core::cmp::Ordering;

/// Sorts `items` in place. Each pass partitions the range, recurses into the
/// smaller side and keeps looping on the larger one, so the stack never holds
/// more than O(log n) frames.
///
/// Worst case is O(n²) time (already sorted input puts every pivot at the
/// end), average O(n log n). Ranges of one element or less are left as they are.
pub(crate) fn quick_sort<E, F>(mut items: &mut [E], compare: &mut F)
where
    F: FnMut(&E, &E) -> Ordering,
{
    while items.len() > 1 {
        let pivot_index = partition(items, compare);
        let (left, right) = core::mem::take(&mut items).split_at_mut(pivot_index);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, compare);
            items = right;
        } else {
            quick_sort(right, compare);
            items = left;
        }
    }
}

/// Moves every element not greater than the last one (the pivot) to the
/// front, then swaps the pivot in right after them. Returns the pivot's
/// final index.
fn partition<E, F>(items: &mut [E], compare: &mut F) -> usize
where
    F: FnMut(&E, &E) -> Ordering,
{
    let high = items.len() - 1;
    let mut boundary = 0;
    for j in 0..high {
        if compare(&items[j], &items[high]) != Ordering::Greater {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, high);
    boundary
}

pub(crate) fn is_sorted<E: Ord>(items: &[E]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
