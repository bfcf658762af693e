//! Bounded sink over a mutable slice.

use crate::primitives::Present;
use crate::protocol::OutputRange;

/// Writes sequentially into `&'a mut [T]` and reports `is_full` once every
/// slot has been written.
#[derive(Debug)]
pub struct SliceWriter<'a, T> {
    data: &'a mut [T],
    written: usize,
}

impl<'a, T> SliceWriter<'a, T> {
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        SliceWriter { data, written: 0 }
    }

    /// Number of elements written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Slots still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.written
    }
}

impl<T> OutputRange<T> for SliceWriter<'_, T> {
    type Bounded = Present;

    #[inline]
    fn put(&mut self, value: T) {
        debug_assert!(!self.is_full(), "put() on a full SliceWriter");
        self.data[self.written] = value;
        self.written += 1;
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.written == self.data.len()
    }
}
