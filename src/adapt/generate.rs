//! Generative ranges: `Generate` (stateful closure) and `Sequence`
//! (pure index function). Both are statically infinite.

use core::fmt;

use crate::primitives::{Absent, Present};
use crate::protocol::{ForwardRange, InputRange, RandomAccessRange};

// =============================================================================
// Generate
// =============================================================================

/// Infinite range produced by re-invoking a zero-argument generator.
///
/// Holds the last produced value; `pop_first` calls the generator again.
/// The generator is owned and never duplicated, so `Generate` is input-only.
pub struct Generate<T, F> {
    current: T,
    generator: F,
}

impl<T, F: FnMut() -> T> Generate<T, F> {
    /// Build the range, invoking `generator` once for the first element.
    #[inline]
    pub fn new(mut generator: F) -> Self {
        let current = generator();
        Generate { current, generator }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Generate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generate")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, F: FnMut() -> T> InputRange for Generate<T, F> {
    type Item = T;
    type Infinite = Present;

    #[inline]
    fn has_more(&self) -> bool {
        true
    }

    #[inline]
    fn first(&self) -> T {
        self.current.clone()
    }

    #[inline]
    fn pop_first(&mut self) {
        self.current = (self.generator)();
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// Infinite range whose `i`-th element is `f(offset + i)`.
///
/// Stateless apart from the offset, so indexing, skipping and slicing are
/// all O(1). Two sequences compare equal when their offsets match.
#[derive(Clone)]
pub struct Sequence<F> {
    f: F,
    offset: usize,
}

impl<F> Sequence<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Sequence { f, offset: 0 }
    }

    /// Index of the current front element in the underlying function domain.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<F> fmt::Debug for Sequence<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<F> PartialEq for Sequence<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl<T, F: Fn(usize) -> T> InputRange for Sequence<F> {
    type Item = T;
    type Infinite = Present;

    #[inline]
    fn has_more(&self) -> bool {
        true
    }

    #[inline]
    fn first(&self) -> T {
        (self.f)(self.offset)
    }

    #[inline]
    fn pop_first(&mut self) {
        self.offset += 1;
    }
}

impl<T, F: Fn(usize) -> T + Clone> ForwardRange for Sequence<F> {
    type Contiguous = Absent;
}

impl<T, F: Fn(usize) -> T + Clone> RandomAccessRange for Sequence<F> {
    #[inline]
    fn at(&self, index: usize) -> T {
        (self.f)(self.offset + index)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.offset += n;
    }
}
