//! Ordering strategies for heaps.
//!
//! A [`Compare`] decides which of two elements has higher priority, i.e.
//! which one belongs closer to the top of the heap. The ordering is a
//! type parameter of the heap, so it is fixed for the lifetime of an
//! instance.

/// Priority relation between two elements.
///
/// `higher(a, b)` must be a strict weak order: irreflexive and
/// transitive. Returning `true` for equal elements breaks the sift
/// termination conditions.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should sit above `b` in the heap.
    fn higher(&self, a: &T, b: &T) -> bool;
}

/// Max-heap ordering: larger values come out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// Min-heap ordering: smaller values come out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<T: Ord + ?Sized> Compare<T> for Max {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Ord + ?Sized> Compare<T> for Min {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Max ordering on a key extracted from each element.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K: Ord, F: Fn(&T) -> K> Compare<T> for ByKey<F> {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        (self.0)(a) > (self.0)(b)
    }
}

/// Adapter for an arbitrary `Fn(&T, &T) -> bool` priority function.
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T, F: Fn(&T, &T) -> bool> Compare<T> for FnCompare<F> {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn higher(&self, a: &T, b: &T) -> bool {
        (**self).higher(a, b)
    }
}
