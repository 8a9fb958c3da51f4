//! Generic binary-heap maintenance.
//!
//! The routines here only see a heap through its primitives: element
//! count, a priority comparison between two indices, an in-place swap,
//! and (for growing/shrinking operations) append/detach at the back.
//! Anything implementing [`HeapOrder`] gets `sift_up`, `sift_down`,
//! `heapify`, `fix` and `is_heap`; anything implementing
//! [`HeapPrimitives`] additionally gets `push`, `pop` and `remove`.
//!
//! Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
//! Index arguments to the trait methods are preconditions: implementors
//! may panic on an out-of-range index. The free functions that take a
//! caller-supplied index validate it first and return
//! [`HeapError::IndexOutOfBounds`].

use crate::order::Compare;
use crate::{HeapError, HeapResult};

/// Read/compare/swap access to a dense sequence viewed as a binary tree.
pub trait HeapOrder {
    /// Current element count.
    fn len(&self) -> usize;

    /// Returns true if the element at `i` outranks the element at `j`.
    fn higher(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`HeapOrder`] plus growth and shrinkage at the back of the sequence.
pub trait HeapPrimitives: HeapOrder {
    type Item;

    /// Append `value` as the new last element.
    fn push_back(&mut self, value: Self::Item);

    /// Detach and return the last element, or `None` if empty.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

#[inline]
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Move the element at `index` towards the root until its parent
/// outranks or equals it.
pub fn sift_up<H: HeapOrder + ?Sized>(h: &mut H, mut index: usize) {
    while index > 0 {
        let p = parent(index);
        if !h.higher(index, p) {
            break;
        }
        h.swap(index, p);
        index = p;
    }
}

/// Move the element at `index` towards the leaves of the whole heap.
pub fn sift_down<H: HeapOrder + ?Sized>(h: &mut H, index: usize) -> bool {
    let n = h.len();
    sift_down_within(h, index, n)
}

/// Sift down considering only the first `n` elements as part of the
/// heap. Returns true if the element moved.
pub fn sift_down_within<H: HeapOrder + ?Sized>(h: &mut H, start: usize, n: usize) -> bool {
    let mut index = start;
    loop {
        let left = left_child(index);
        if left >= n {
            break;
        }
        let right = left + 1;
        let mut best = left;
        if right < n && h.higher(right, left) {
            best = right;
        }
        if !h.higher(best, index) {
            break;
        }
        h.swap(index, best);
        index = best;
    }
    index > start
}

/// Establish the heap invariant over an arbitrary sequence in O(n).
pub fn heapify<H: HeapOrder + ?Sized>(h: &mut H) {
    let n = h.len();
    for i in (0..n / 2).rev() {
        sift_down_within(h, i, n);
    }
}

/// Restore the invariant after the element at `index` changed priority.
pub fn fix<H: HeapOrder + ?Sized>(h: &mut H, index: usize) -> HeapResult<()> {
    check_index(h, index)?;
    if !sift_down(h, index) {
        sift_up(h, index);
    }
    Ok(())
}

/// Returns true if no child outranks its parent.
pub fn is_heap<H: HeapOrder + ?Sized>(h: &H) -> bool {
    (1..h.len()).all(|i| !h.higher(i, parent(i)))
}

/// Append `value` and sift it up. O(log n).
pub fn push<H: HeapPrimitives + ?Sized>(h: &mut H, value: H::Item) {
    h.push_back(value);
    let last = h.len() - 1;
    sift_up(h, last);
}

/// Detach the top element. O(log n).
///
/// Returns [`HeapError::Empty`] when there is nothing to pop.
pub fn pop<H: HeapPrimitives + ?Sized>(h: &mut H) -> HeapResult<H::Item> {
    let n = h.len();
    if n == 0 {
        return Err(HeapError::Empty);
    }
    h.swap(0, n - 1);
    let top = h.pop_back().ok_or(HeapError::Empty)?;
    sift_down(h, 0);
    Ok(top)
}

/// Detach the element at `index`, wherever it is in the tree. O(log n).
pub fn remove<H: HeapPrimitives + ?Sized>(h: &mut H, index: usize) -> HeapResult<H::Item> {
    check_index(h, index)?;
    let last = h.len() - 1;
    if index != last {
        h.swap(index, last);
    }
    let value = h.pop_back().ok_or(HeapError::Empty)?;
    if index < h.len() {
        fix(h, index)?;
    }
    Ok(value)
}

fn check_index<H: HeapOrder + ?Sized>(h: &H, index: usize) -> HeapResult<()> {
    let len = h.len();
    if index >= len {
        return Err(HeapError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// A borrowed slice viewed as a heap under a comparator.
///
/// Cannot grow or shrink; used for in-place construction and sorting.
pub struct SliceHeap<'a, T, C> {
    data: &'a mut [T],
    cmp: C,
}

impl<'a, T, C: Compare<T>> SliceHeap<'a, T, C> {
    pub fn new(data: &'a mut [T], cmp: C) -> Self {
        Self { data, cmp }
    }

    pub fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T, C: Compare<T>> HeapOrder for SliceHeap<'_, T, C> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn higher(&self, i: usize, j: usize) -> bool {
        self.cmp.higher(&self.data[i], &self.data[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}
