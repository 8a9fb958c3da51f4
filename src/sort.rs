//! In-place heapsort.
//!
//! Builds a heap over the slice under the given ordering, then repeatedly
//! moves the top to the end of the shrinking heap region. Not stable.

use crate::order::{Compare, Max};
use crate::sift::{self, HeapOrder, SliceHeap};

/// Sort `data` in ascending order.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, Max);
}

/// Sort `data` so that the highest-priority element under `cmp` ends up
/// last.
pub fn heap_sort_by<T, C: Compare<T>>(data: &mut [T], cmp: C) {
    let mut view = SliceHeap::new(data, cmp);
    sift::heapify(&mut view);
    for end in (1..view.len()).rev() {
        view.swap(0, end);
        sift::sift_down_within(&mut view, 0, end);
    }
}

/// Returns true if no adjacent pair is out of order under `cmp`.
pub fn is_sorted_by<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    data.windows(2).all(|w| !cmp.higher(&w[0], &w[1]))
}
