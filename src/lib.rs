pub mod heap;
pub mod order;
pub mod sift;
pub mod sort;

pub use heap::{BinaryHeap, IntHeap};
pub use order::{ByKey, Compare, FnCompare, Max, Min};

#[cfg(test)]
mod validation;

/// Error types for heap operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeapError {
    /// The operation needs at least one element and the heap is empty.
    Empty,
    /// An index argument is outside `0..len`.
    IndexOutOfBounds { index: usize, len: usize },
    /// The backing storage could not grow.
    CapacityExhausted,
}

impl std::fmt::Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "heap is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for heap of length {len}")
            }
            Self::CapacityExhausted => write!(f, "heap storage capacity exhausted"),
        }
    }
}

impl std::error::Error for HeapError {}

impl From<std::collections::TryReserveError> for HeapError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::CapacityExhausted
    }
}

pub type HeapResult<T> = Result<T, HeapError>;
