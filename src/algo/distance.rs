//! Element distance between two positions of the same range.
//!
//! The implementation is chosen by the range's `Contiguous` marker:
//!
//! | `Contiguous` | Strategy | Cost |
//! |--------------|----------|------|
//! | `Present` | pointer subtraction on the backing slice | O(1) |
//! | `Absent` | clone `from`, pop until equal to `to` | O(n) |
//!
//! `to` must be reachable from `from` by popping; otherwise the result is
//! unspecified (debug builds assert).

use core::mem;

use crate::primitives::{Absent, Present};
use crate::protocol::{ContiguousRange, ForwardRange, InputRange};

/// Distance rule for `R`, implemented for `Present` and `Absent`.
pub trait DistanceStrategy<R> {
    /// Elements between `from` and `to`.
    fn distance(from: &R, to: &R) -> usize;

    /// Advance `from` until it equals `to`, returning the number of pops.
    fn advance_to(from: &mut R, to: &R) -> usize;
}

impl<R: ContiguousRange> DistanceStrategy<R> for Present {
    #[inline]
    fn distance(from: &R, to: &R) -> usize {
        let (a, b) = (from.as_slice(), to.as_slice());
        let size = mem::size_of::<R::Elem>();
        if size == 0 {
            return a.len().saturating_sub(b.len());
        }
        let (start, end) = (a.as_ptr() as usize, b.as_ptr() as usize);
        debug_assert!(start <= end, "distance_between: `to` precedes `from`");
        end.saturating_sub(start) / size
    }

    #[inline]
    fn advance_to(from: &mut R, to: &R) -> usize {
        let n = Self::distance(from, to);
        from.advance_by(n);
        n
    }
}

impl<R: ForwardRange + PartialEq> DistanceStrategy<R> for Absent {
    #[inline]
    fn distance(from: &R, to: &R) -> usize {
        let mut cursor = from.clone();
        Self::advance_to(&mut cursor, to)
    }

    fn advance_to(from: &mut R, to: &R) -> usize {
        let mut n = 0;
        while *from != *to {
            debug_assert!(from.has_more(), "distance_between: `to` unreachable from `from`");
            if !from.has_more() {
                break;
            }
            from.pop_first();
            n += 1;
        }
        n
    }
}

/// Number of elements from `from` up to (not including) `to`.
///
/// ```
/// use tola_ranges::{distance_between, InputRange, Slice};
///
/// let data = [1, 2, 3, 4];
/// let from = Slice::new(&data);
/// let mut to = from;
/// to.pop_first();
/// to.pop_first();
/// assert_eq!(distance_between(&from, &to), 2);
/// ```
#[inline]
pub fn distance_between<R>(from: &R, to: &R) -> usize
where
    R: ForwardRange,
    R::Contiguous: DistanceStrategy<R>,
{
    <R::Contiguous as DistanceStrategy<R>>::distance(from, to)
}

/// Move `from` forward to `to`, returning how many elements were skipped.
#[inline]
pub fn distance_advance_to<R>(from: &mut R, to: &R) -> usize
where
    R: ForwardRange,
    R::Contiguous: DistanceStrategy<R>,
{
    <R::Contiguous as DistanceStrategy<R>>::advance_to(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt::Sequence;
    use crate::protocol::RandomAccessRange;
    use crate::source::Slice;

    #[test]
    fn test_contiguous_distance() {
        let data = [10u64, 20, 30, 40, 50];
        let from = Slice::new(&data);
        let mut to = from;
        to.advance_by(3);
        assert_eq!(distance_between(&from, &to), 3);
        assert_eq!(distance_between(&to, &to), 0);

        let mut moving = from;
        assert_eq!(distance_advance_to(&mut moving, &to), 3);
        assert_eq!(moving, to);
    }

    #[test]
    fn test_contiguous_through_take() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let from = Slice::new(&data).take(5);
        let mut to = from.clone();
        to.pop_first();
        assert_eq!(distance_between(&from, &to), 1);
    }

    #[test]
    fn test_zero_sized_elements() {
        let data = [(); 4];
        let from = Slice::new(&data);
        let mut to = from;
        to.pop_first();
        to.pop_first();
        assert_eq!(distance_between(&from, &to), 2);
    }

    #[test]
    fn test_stepping_distance() {
        let from = Sequence::new(|i: usize| i * i);
        let mut to = from.clone();
        to.advance_by(6);
        assert_eq!(distance_between(&from, &to), 6);

        let mut moving = from.clone();
        assert_eq!(distance_advance_to(&mut moving, &to), 6);
        assert_eq!(moving.first(), 36);
    }

    #[test]
    fn test_stepping_through_take() {
        let from = Sequence::new(|i: usize| i).take(10);
        let mut to = from.clone();
        to.pop_first();
        to.pop_first();
        assert_eq!(distance_between(&from, &to), 2);
    }
}
