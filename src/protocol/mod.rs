//! # Layer 1: Core Sequence Protocol
//!
//! The tier traits every range implements, from weakest to strongest:
//!
//! ```text
//! InputRange  (has_more / first / pop_first)
//!     |
//! ForwardRange  (+ Clone: save a position, re-traverse)
//!     |                         \
//! BidirectionalRange            RandomAccessRange
//! (last / pop_last)             (at / advance_by / slice)
//! ```
//!
//! Orthogonal capabilities:
//! - `InputRange::Infinite` - type-level flag for ranges that never exhaust
//! - `ForwardRange::Contiguous` - type-level flag for slice-backed storage
//! - `HasLength`, `ContiguousRange`, `Assignable`, `OutputRange<T>`
//! - `OutputRange::Bounded` - type-level flag for fixed-capacity sinks
//!
//! Marker traits `StaticallyInfinite` and `Finite` are derived from the
//! `Infinite` flag and are what unbounded terminal algorithms bound on, so an
//! infinite range handed to `reduce` is rejected by the compiler.

pub mod bridge;

use crate::adapt::Take;
use crate::primitives::{Absent, Bool, Present};

pub use bridge::RangeIter;

// =============================================================================
// Tier Traits
// =============================================================================

/// Single-pass range. Every element is observed at most once per position.
///
/// `first` and `pop_first` are only valid while `has_more()` is true; calling
/// them on an exhausted range is a precondition violation (debug assertion,
/// bounded-cost panic in release builds).
pub trait InputRange {
    /// Element type yielded by `first`.
    type Item;

    /// `Present` if this range never reports exhaustion.
    type Infinite: Bool;

    /// Whether at least one element remains. Pure and idempotent.
    fn has_more(&self) -> bool;

    /// The current front element.
    fn first(&self) -> Self::Item;

    /// Drop the current front element.
    fn pop_first(&mut self);

    /// Read the front element and advance past it.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            let item = self.first();
            self.pop_first();
            Some(item)
        } else {
            None
        }
    }

    /// Bound this range to at most `n` elements.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Bridge into `core::iter::Iterator`.
    #[inline]
    fn iter(self) -> RangeIter<Self>
    where
        Self: Sized,
    {
        RangeIter::new(self)
    }
}

/// Multi-pass range: cloning saves the current position.
pub trait ForwardRange: InputRange + Clone {
    /// `Present` if the range is a view over contiguous memory.
    type Contiguous: Bool;
}

/// Forward range that can also be consumed from the back.
///
/// Once front and back meet, `has_more()` is false.
pub trait BidirectionalRange: ForwardRange {
    /// The current back element.
    fn last(&self) -> Self::Item;

    /// Drop the current back element.
    fn pop_last(&mut self);
}

/// Forward range with constant-time indexing.
///
/// Infinite random-access ranges (`Repeat`, `Sequence`) have no back end and
/// are therefore not bidirectional.
pub trait RandomAccessRange: ForwardRange {
    /// Element at `index` positions past the front.
    ///
    /// For finite ranges `index < len()` is a precondition.
    fn at(&self, index: usize) -> Self::Item;

    /// Skip `n` elements in O(1). Finite ranges clamp `n` to what remains.
    fn advance_by(&mut self, n: usize);

    /// O(1) sub-range `[start, end)`.
    ///
    /// `start > end` is a precondition violation.
    #[inline]
    fn slice(mut self, start: usize, end: usize) -> Take<Self>
    where
        Self: Sized,
    {
        debug_assert!(start <= end, "slice({start}, {end}): start after end");
        self.advance_by(start);
        Take::new(self, end.saturating_sub(start))
    }
}

// =============================================================================
// Auxiliary Capabilities
// =============================================================================

/// Range whose remaining element count is known in O(1).
pub trait HasLength {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Random-access range backed by a contiguous slice.
///
/// Enables pointer-arithmetic fast paths such as O(1) `distance_between`.
pub trait ContiguousRange: RandomAccessRange<Contiguous = Present> + HasLength {
    /// Element type of the backing storage.
    type Elem;

    /// The remaining elements as a slice.
    fn as_slice(&self) -> &[Self::Elem];
}

/// Known-length storage whose elements can be read by reference and
/// overwritten in place.
pub trait Assignable: HasLength {
    type Elem;

    /// Borrow the element at `index`. `index < len()` is a precondition.
    fn get(&self, index: usize) -> &Self::Elem;

    /// Overwrite the element at `index`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Exchange two elements.
    fn swap_at(&mut self, a: usize, b: usize);
}

/// Sink accepting elements one at a time.
pub trait OutputRange<T> {
    /// `Present` if the sink has fixed capacity and eventually reports
    /// `is_full`; `Absent` for sinks that accept without limit.
    type Bounded: Bool;

    /// Accept one element. Calling `put` on a full sink is a precondition
    /// violation.
    fn put(&mut self, value: T);

    /// Whether the sink has run out of capacity.
    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

// =============================================================================
// Infiniteness Markers
// =============================================================================

/// Ranges that statically never exhaust.
pub trait StaticallyInfinite: InputRange<Infinite = Present> {}

impl<R: InputRange<Infinite = Present> + ?Sized> StaticallyInfinite for R {}

/// Ranges that may exhaust; required by full-traversal algorithms.
pub trait Finite: InputRange<Infinite = Absent> {}

impl<R: InputRange<Infinite = Absent> + ?Sized> Finite for R {}

// =============================================================================
// Forwarding Impls
// =============================================================================

impl<R: InputRange + ?Sized> InputRange for &mut R {
    type Item = R::Item;
    type Infinite = R::Infinite;

    #[inline]
    fn has_more(&self) -> bool {
        (**self).has_more()
    }

    #[inline]
    fn first(&self) -> Self::Item {
        (**self).first()
    }

    #[inline]
    fn pop_first(&mut self) {
        (**self).pop_first()
    }
}

impl<R: HasLength + ?Sized> HasLength for &mut R {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<T, O: OutputRange<T> + ?Sized> OutputRange<T> for &mut O {
    type Bounded = O::Bounded;

    #[inline]
    fn put(&mut self, value: T) {
        (**self).put(value)
    }

    #[inline]
    fn is_full(&self) -> bool {
        (**self).is_full()
    }
}

#[cfg(feature = "alloc")]
mod boxed {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use super::{HasLength, InputRange, OutputRange};
    use crate::primitives::Absent;

    impl<R: InputRange + ?Sized> InputRange for Box<R> {
        type Item = R::Item;
        type Infinite = R::Infinite;

        #[inline]
        fn has_more(&self) -> bool {
            (**self).has_more()
        }

        #[inline]
        fn first(&self) -> Self::Item {
            (**self).first()
        }

        #[inline]
        fn pop_first(&mut self) {
            (**self).pop_first()
        }
    }

    impl<R: HasLength + ?Sized> HasLength for Box<R> {
        #[inline]
        fn len(&self) -> usize {
            (**self).len()
        }
    }

    /// Growable, never-full sink.
    impl<T> OutputRange<T> for Vec<T> {
        type Bounded = Absent;

        #[inline]
        fn put(&mut self, value: T) {
            self.push(value);
        }
    }
}
