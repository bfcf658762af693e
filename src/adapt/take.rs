//! `Take`: bound a range to at most `n` elements.
//!
//! Take keeps the tier of its child. Length is known when the child either
//! has a length or is statically infinite; the rule is picked through the
//! child's `Infinite` marker (see [`TakeLength`]).

use crate::primitives::{Absent, Present};
use crate::protocol::{
    BidirectionalRange, ContiguousRange, ForwardRange, HasLength, InputRange, RandomAccessRange,
};

/// First `n` elements of `R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Take<R> {
    inner: R,
    n: usize,
}

impl<R> Take<R> {
    #[inline]
    pub fn new(inner: R, n: usize) -> Self {
        Take { inner, n }
    }

    /// Upper bound on the remaining element count.
    #[inline]
    pub fn limit(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: InputRange> InputRange for Take<R> {
    type Item = R::Item;
    type Infinite = Absent;

    #[inline]
    fn has_more(&self) -> bool {
        self.n > 0 && self.inner.has_more()
    }

    #[inline]
    fn first(&self) -> Self::Item {
        debug_assert!(self.n > 0, "first() on an exhausted Take");
        self.inner.first()
    }

    #[inline]
    fn pop_first(&mut self) {
        debug_assert!(self.n > 0, "pop_first() on an exhausted Take");
        self.inner.pop_first();
        self.n -= 1;
    }
}

impl<R: ForwardRange> ForwardRange for Take<R> {
    type Contiguous = R::Contiguous;
}

impl<R: RandomAccessRange> RandomAccessRange for Take<R> {
    #[inline]
    fn at(&self, index: usize) -> Self::Item {
        debug_assert!(index < self.n, "at({index}) past Take bound {}", self.n);
        self.inner.at(index)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        let n = n.min(self.n);
        self.inner.advance_by(n);
        self.n -= n;
    }
}

impl<R: RandomAccessRange> BidirectionalRange for Take<R>
where
    Self: HasLength,
{
    #[inline]
    fn last(&self) -> Self::Item {
        debug_assert!(self.has_more(), "last() on an exhausted Take");
        self.inner.at(self.len() - 1)
    }

    #[inline]
    fn pop_last(&mut self) {
        debug_assert!(self.has_more(), "pop_last() on an exhausted Take");
        self.n = self.len() - 1;
    }
}

// =============================================================================
// Length Dispatch
// =============================================================================

/// Length rule for `Take<R>`, selected by `R::Infinite`.
///
/// - `Absent`: the child must know its own length; result is `min(n, len)`.
/// - `Present`: the child never runs out; result is `n`.
pub trait TakeLength<R> {
    fn remaining(inner: &R, n: usize) -> usize;
}

impl<R: HasLength> TakeLength<R> for Absent {
    #[inline(always)]
    fn remaining(inner: &R, n: usize) -> usize {
        inner.len().min(n)
    }
}

impl<R> TakeLength<R> for Present {
    #[inline(always)]
    fn remaining(_inner: &R, n: usize) -> usize {
        n
    }
}

impl<R: InputRange> HasLength for Take<R>
where
    R::Infinite: TakeLength<R>,
{
    #[inline]
    fn len(&self) -> usize {
        <R::Infinite as TakeLength<R>>::remaining(&self.inner, self.n)
    }
}

impl<R: ContiguousRange> ContiguousRange for Take<R>
where
    Self: HasLength,
{
    type Elem = R::Elem;

    #[inline]
    fn as_slice(&self) -> &[R::Elem] {
        let rest = self.inner.as_slice();
        &rest[..self.n.min(rest.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt::{Repeat, Sequence};
    use crate::source::Slice;

    #[test]
    fn test_take_bounds_finite() {
        let data = [1, 2, 3, 4, 5];
        let t = Slice::new(&data).take(3);
        assert_eq!(t.len(), 3);
        assert_eq!(*t.at(2), 3);
        assert_eq!(*t.last(), 3);
        assert_eq!(t.as_slice(), &[1, 2, 3]);

        let short = Slice::new(&data).take(10);
        assert_eq!(short.len(), 5);
    }

    #[test]
    fn test_take_of_infinite_has_length() {
        let t = Repeat::new('x').take(4);
        assert_eq!(t.len(), 4);
        assert_eq!(t.last(), 'x');

        let squares = Sequence::new(|i: usize| i * i).take(5);
        assert_eq!(squares.len(), 5);
        assert_eq!(squares.last(), 16);
    }

    #[test]
    fn test_slice_offsets_and_clamps() {
        let data = [10, 20, 30, 40, 50];
        let s = Slice::new(&data).take(4).slice(1, 3);
        assert_eq!(s.len(), 2);
        assert_eq!(*s.first(), 20);
        assert_eq!(*s.last(), 30);

        let mut t = Slice::new(&data).take(2);
        t.advance_by(5);
        assert!(!t.has_more());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn test_pop_last_shrinks_bound() {
        let mut t = Sequence::new(|i: usize| i).take(3);
        t.pop_last();
        assert_eq!(t.len(), 2);
        assert_eq!(t.last(), 1);
        t.pop_first();
        t.pop_last();
        assert!(!t.has_more());
    }
}
