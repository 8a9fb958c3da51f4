//! An array-backed binary heap.
//!
//! The heap owns a dense `Vec<T>` and an ordering strategy `C`. Storage
//! primitives live in the [`HeapOrder`]/[`HeapPrimitives`] impls; every
//! compound operation is delegated to [`crate::sift`]. The default
//! ordering is [`Max`], so `pop` returns the largest element first.

use crate::order::{Compare, Max};
use crate::sift::{self, HeapOrder, HeapPrimitives};
use crate::{HeapError, HeapResult};

/// A binary heap of `T` ordered by `C`.
///
/// Index 0 is the top. The ordering cannot be changed after
/// construction.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = Max> {
    data: Vec<T>,
    cmp: C,
}

/// Max-heap of integers.
pub type IntHeap = BinaryHeap<i64, Max>;

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Create a new, empty heap.
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }

    /// Build a heap from an arbitrary vector in O(n).
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with(data, C::default())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    pub fn from_vec_with(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        sift::heapify(&mut heap);
        heap
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The highest-priority element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The underlying storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate in storage (heap) order, not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns true if the element at `i` outranks the element at `j`.
    pub fn compare(&self, i: usize, j: usize) -> HeapResult<bool> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.cmp.higher(&self.data[i], &self.data[j]))
    }

    /// Push an element onto the heap.
    pub fn push(&mut self, value: T) {
        sift::push(self, value);
    }

    /// Push an element, reporting allocation failure instead of aborting.
    pub fn try_push(&mut self, value: T) -> HeapResult<()> {
        self.data.try_reserve(1)?;
        sift::push(self, value);
        Ok(())
    }

    /// Pop the highest-priority element.
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> HeapResult<T> {
        sift::pop(self)
    }

    /// Modify the element at `index` in place and restore heap order.
    pub fn update<F: FnOnce(&mut T)>(&mut self, index: usize, f: F) -> HeapResult<()> {
        self.check_index(index)?;
        f(&mut self.data[index]);
        sift::fix(self, index)
    }

    /// Remove the element at storage index `index`.
    pub fn remove(&mut self, index: usize) -> HeapResult<T> {
        sift::remove(self, index)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the heap, returning the storage in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consume the heap, returning elements sorted lowest priority first.
    ///
    /// For [`Max`] this is ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let n = self.data.len();
        for end in (1..n).rev() {
            self.data.swap(0, end);
            sift::sift_down_within(&mut self, 0, end);
        }
        self.data
    }

    /// Consume the heap into an iterator that pops in priority order.
    pub fn into_iter_sorted(self) -> IntoSorted<T, C> {
        IntoSorted { heap: self }
    }

    fn check_index(&self, index: usize) -> HeapResult<()> {
        if index >= self.data.len() {
            return Err(HeapError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

impl<T, C: Compare<T>> HeapOrder for BinaryHeap<T, C> {
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

impl<T, C: Compare<T>> HeapPrimitives for BinaryHeap<T, C> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        self.data.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.data.pop()
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for BinaryHeap<T, C> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.data.reserve(lower);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator returned by [`BinaryHeap::into_iter_sorted`].
#[derive(Debug, Clone)]
pub struct IntoSorted<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.heap.len();
        (n, Some(n))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoSorted<T, C> {}
