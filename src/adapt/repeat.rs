//! Constant and geometric infinite ranges.

use core::ops::Mul;

use crate::primitives::{Absent, Present};
use crate::protocol::{ForwardRange, InputRange, RandomAccessRange};

/// The same value forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Repeat { value }
    }
}

impl<T: Clone> InputRange for Repeat<T> {
    type Item = T;
    type Infinite = Present;

    #[inline]
    fn has_more(&self) -> bool {
        true
    }

    #[inline]
    fn first(&self) -> T {
        self.value.clone()
    }

    #[inline]
    fn pop_first(&mut self) {}
}

impl<T: Clone> ForwardRange for Repeat<T> {
    type Contiguous = Absent;
}

impl<T: Clone> RandomAccessRange for Repeat<T> {
    #[inline]
    fn at(&self, _index: usize) -> T {
        self.value.clone()
    }

    #[inline]
    fn advance_by(&mut self, _n: usize) {}
}

/// Exponent range: `start, start * ratio, start * ratio^2, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Powers<T> {
    current: T,
    ratio: T,
}

impl<T> Powers<T> {
    #[inline]
    pub fn new(start: T, ratio: T) -> Self {
        Powers {
            current: start,
            ratio,
        }
    }
}

impl<T: Copy + Mul<Output = T>> InputRange for Powers<T> {
    type Item = T;
    type Infinite = Present;

    #[inline]
    fn has_more(&self) -> bool {
        true
    }

    #[inline]
    fn first(&self) -> T {
        self.current
    }

    #[inline]
    fn pop_first(&mut self) {
        self.current = self.current * self.ratio;
    }
}

impl<T: Copy + Mul<Output = T>> ForwardRange for Powers<T> {
    type Contiguous = Absent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_is_constant() {
        let mut r = Repeat::new("z");
        assert_eq!(r.at(1_000_000), "z");
        r.pop_first();
        r.advance_by(7);
        assert_eq!(r.first(), "z");
    }

    #[test]
    fn test_powers() {
        let mut r = Powers::new(3u64, 2);
        let got: [u64; 4] = core::array::from_fn(|_| r.next().unwrap_or(0));
        assert_eq!(got, [3, 6, 12, 24]);
    }
}
