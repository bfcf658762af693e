//! Bridge from ranges to `core::iter::Iterator`.

use super::InputRange;
use crate::primitives::Bool;

/// Iterator over the remaining elements of a range.
#[derive(Debug, Clone)]
pub struct RangeIter<R> {
    range: R,
}

impl<R> RangeIter<R> {
    #[inline]
    pub fn new(range: R) -> Self {
        RangeIter { range }
    }

    /// Give back the underlying range at its current position.
    #[inline]
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R: InputRange> Iterator for RangeIter<R> {
    type Item = R::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if <R::Infinite as Bool>::VALUE {
            (usize::MAX, None)
        } else {
            (0, None)
        }
    }
}
