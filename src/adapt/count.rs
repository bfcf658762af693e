//! `Count`: a sink that only counts.
//!
//! Used to size an output before allocating it: run the producer into a
//! `Count`, reserve exactly that many slots, then run it again into the real
//! destination.

use crate::primitives::Absent;
use crate::protocol::OutputRange;

/// Counts every `put`, storing nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    count: usize,
}

impl Count {
    #[inline]
    pub const fn new() -> Self {
        Count { count: 0 }
    }

    /// Number of elements put so far.
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl<T> OutputRange<T> for Count {
    type Bounded = Absent;

    #[inline]
    fn put(&mut self, _value: T) {
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_any_element_type() {
        let mut c = Count::new();
        c.put(1u8);
        c.put("two");
        c.put(3.0f32);
        assert_eq!(c.count(), 3);
        assert!(!OutputRange::<u8>::is_full(&c));
    }
}
