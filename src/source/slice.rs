//! Borrowed views over contiguous storage.

use core::fmt;
use core::ptr;

use crate::primitives::{Absent, Present};
use crate::protocol::{
    Assignable, BidirectionalRange, ContiguousRange, ForwardRange, HasLength, InputRange,
    RandomAccessRange,
};

// =============================================================================
// Slice
// =============================================================================

/// Read-only view over `&'a [T]`.
///
/// Yields `&'a T`, so references stay valid after the cursor moves on.
/// Two views are equal when they cover the same remaining memory.
pub struct Slice<'a, T> {
    data: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    #[inline]
    pub const fn new(data: &'a [T]) -> Self {
        Slice { data }
    }

    /// The remaining elements, with the full borrow lifetime.
    #[inline]
    pub fn rest(&self) -> &'a [T] {
        self.data
    }
}

impl<T> Clone for Slice<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> PartialEq for Slice<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data.as_ptr(), other.data.as_ptr()) && self.data.len() == other.data.len()
    }
}

impl<T> Eq for Slice<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slice").field(&self.data).finish()
    }
}

impl<'a, T> InputRange for Slice<'a, T> {
    type Item = &'a T;
    type Infinite = Absent;

    #[inline]
    fn has_more(&self) -> bool {
        !self.data.is_empty()
    }

    #[inline]
    fn first(&self) -> &'a T {
        debug_assert!(self.has_more(), "first() on an exhausted Slice");
        &self.data[0]
    }

    #[inline]
    fn pop_first(&mut self) {
        debug_assert!(self.has_more(), "pop_first() on an exhausted Slice");
        self.data = &self.data[1..];
    }
}

impl<T> ForwardRange for Slice<'_, T> {
    type Contiguous = Present;
}

impl<'a, T> BidirectionalRange for Slice<'a, T> {
    #[inline]
    fn last(&self) -> &'a T {
        debug_assert!(self.has_more(), "last() on an exhausted Slice");
        &self.data[self.data.len() - 1]
    }

    #[inline]
    fn pop_last(&mut self) {
        debug_assert!(self.has_more(), "pop_last() on an exhausted Slice");
        self.data = &self.data[..self.data.len() - 1];
    }
}

impl<'a, T> RandomAccessRange for Slice<'a, T> {
    #[inline]
    fn at(&self, index: usize) -> &'a T {
        debug_assert!(index < self.data.len(), "at({index}) out of bounds");
        &self.data[index]
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.data = &self.data[n.min(self.data.len())..];
    }
}

impl<T> HasLength for Slice<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> ContiguousRange for Slice<'_, T> {
    type Elem = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

// =============================================================================
// SliceMut
// =============================================================================

/// Mutable view over `&'a mut [T]`, used by in-place algorithms.
#[derive(Debug)]
pub struct SliceMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> SliceMut<'a, T> {
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        SliceMut { data }
    }

    /// Read-only view of the same elements.
    #[inline]
    pub fn as_range(&self) -> Slice<'_, T> {
        Slice::new(&*self.data)
    }
}

impl<T> HasLength for SliceMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> Assignable for SliceMut<'_, T> {
    type Elem = T;

    #[inline]
    fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len(), "get({index}) out of bounds");
        &self.data[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        debug_assert!(index < self.data.len(), "set({index}) out of bounds");
        self.data[index] = value;
    }

    #[inline]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}
