//! Moving elements from a range into a sink.

use crate::primitives::{Implies, IsPresent};
use crate::protocol::{InputRange, OutputRange};

#[cfg(feature = "alloc")]
use {
    crate::adapt::Count,
    crate::error::{RangeResult, ReserveResultExt},
    crate::protocol::{Finite, ForwardRange},
    alloc::vec::Vec,
};

/// Put elements of `range` into `out` until either side runs out.
///
/// Returns the number of elements copied. Stops early when `out` reports
/// `is_full`, so an infinite range may be drained into a bounded sink.
///
/// ```
/// use tola_ranges::{copy_to, Repeat, SliceWriter};
///
/// let mut buf = [0u8; 4];
/// let copied = copy_to(Repeat::new(7u8), &mut SliceWriter::new(&mut buf));
/// assert_eq!(copied, 4);
/// assert_eq!(buf, [7; 4]);
/// ```
///
/// The loop must end on one side: an infinite range into an unbounded sink
/// does not compile.
///
/// ```compile_fail
/// use tola_ranges::{copy_to, Repeat};
///
/// let mut out: Vec<u8> = Vec::new();
/// copy_to(Repeat::new(1u8), &mut out);
/// ```
pub fn copy_to<R, O>(mut range: R, out: &mut O) -> usize
where
    R: InputRange,
    O: OutputRange<R::Item> + ?Sized,
    Implies<R::Infinite, <O as OutputRange<R::Item>>::Bounded>: IsPresent,
{
    let mut copied = 0;
    while !out.is_full() {
        let Some(item) = range.next() else {
            break;
        };
        out.put(item);
        copied += 1;
    }
    copied
}

/// Count the range, reserve room for that many elements, then fill.
///
/// The range is traversed twice, which is why it must be a forward range.
/// The reservation happens once and the fill never reallocates. The
/// allocator may hand back more capacity than requested.
#[cfg(feature = "alloc")]
pub fn collect_counted<R>(range: R) -> RangeResult<Vec<R::Item>>
where
    R: ForwardRange + Finite,
{
    let mut count = Count::new();
    copy_to(range.clone(), &mut count);
    let n = count.count();

    let mut out = Vec::new();
    out.try_reserve_exact(n).map_alloc_err(n)?;
    copy_to(range, &mut out);
    debug_assert_eq!(out.len(), n);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt::{Count, Sequence};
    use crate::source::{Slice, SliceWriter};

    #[test]
    fn test_copy_stops_at_shorter_side() {
        let src = [1, 2, 3];
        let mut buf = [&0; 5];
        let mut w = SliceWriter::new(&mut buf);
        assert_eq!(copy_to(Slice::new(&src), &mut w), 3);
        assert_eq!(w.remaining(), 2);
        assert_eq!(buf, [&1, &2, &3, &0, &0]);
    }

    #[test]
    fn test_copy_infinite_into_bounded_sink() {
        let mut buf = [0usize; 4];
        let copied = copy_to(Sequence::new(|i: usize| i * 10), &mut SliceWriter::new(&mut buf));
        assert_eq!(copied, 4);
        assert_eq!(buf, [0, 10, 20, 30]);
    }

    #[test]
    fn test_copy_finite_into_unbounded_sink() {
        let mut count = Count::new();
        assert_eq!(copy_to(Slice::new(&[1, 2, 3]).take(2), &mut count), 2);
        assert_eq!(count.count(), 2);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_collect_counted_fills_once() {
        let data = [4, 8, 15, 16, 23, 42];
        let v = collect_counted(Slice::new(&data).take(4)).unwrap();
        assert_eq!(v, [&4, &8, &15, &16]);
        assert!(v.capacity() >= 4);

        let empty: [u8; 0] = [];
        assert!(collect_counted(Slice::new(&empty)).unwrap().is_empty());
    }
}
