#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Union, Vec sinks, counted allocation in no_std
// - check: range_check! proc-macro
// - detect: Detect<T> detector, range_caps! / range_tier!

//! # tola-ranges
//!
//! Lazy, composable sequences with compile-time capability dispatch.
//!
//! ## Architecture
//!
//! A range exposes three operations (`has_more`, `first`, `pop_first`) and
//! opts into stronger tiers by implementing more traits. Algorithms are
//! written once against the tier traits; where a faster path exists for a
//! stronger capability, it is picked through a type-level `Present`/`Absent`
//! marker, never a runtime branch.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, type-level Not / Or / Implies, IsPresent     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Protocol                                                |
//! |  - InputRange / Forward / Bidirectional / RandomAccess            |
//! |  - HasLength, ContiguousRange, Assignable, OutputRange            |
//! |  - StaticallyInfinite / Finite markers, Detect<T>, range_check!   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Sources       Slice, SliceMut, SliceWriter, AsRange     |
//! |  Layer 3: Adapters      Take, Generate, Sequence, Repeat, Count.. |
//! |  Layer 4: Merge         Union (k-way heap merge)                  |
//! |  Layer 5: Algorithms    reduce, is_sorted, distance, lines, ascii |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_ranges::prelude::*;
//!
//! let data = [3, 1, 4, 1, 5, 9, 2, 6];
//! let head = data.as_range().take(4);
//! assert_eq!(head.len(), 4);
//! assert_eq!(reduce(head, 0, |acc, x| acc + x), 9);
//!
//! // Infinite ranges are fine as long as something bounds them.
//! let squares = Sequence::new(|i: usize| i * i);
//! assert_eq!(squares.slice(2, 5).iter().collect::<Vec<_>>(), [4, 9, 16]);
//! ```

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the detector macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Protocol
// =============================================================================
pub mod protocol;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 2-3: Sources and Adapters
// =============================================================================
pub mod adapt;
pub mod source;

// =============================================================================
// Layer 4: Merge Engine
// =============================================================================
#[cfg(feature = "alloc")]
pub mod merge;

// =============================================================================
// Layer 5: Algorithms
// =============================================================================
pub mod algo;

#[cfg(feature = "alloc")]
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Bool, Implies, IsPresent, Present};
pub use protocol::{
    Assignable, BidirectionalRange, ContiguousRange, Finite, ForwardRange, HasLength, InputRange,
    OutputRange, RandomAccessRange, RangeIter, StaticallyInfinite,
};

pub use source::{AsRange, AsRangeMut, Slice, SliceMut, SliceWriter};

pub use adapt::{Count, Generate, Powers, Repeat, Segments, Sequence, Take, TakeLength, ZStrings};

#[cfg(feature = "alloc")]
pub use merge::Union;

pub use algo::{
    call_each, copy_to, count_lines, distance_advance_to, distance_between, find_ascii,
    find_ascii_advance, find_ascii_ignore_case, for_each, is_sorted, reduce, replace_ascii_len,
    replace_ascii_to, selection_sort, skip_spaces_count_lines, AsciiMatch, CharUnit,
    DistanceStrategy,
};
#[cfg(feature = "alloc")]
pub use algo::{collect_counted, replace_ascii, replace_ascii_bytes};

#[cfg(feature = "alloc")]
pub use error::{RangeError, RangeResult};

#[cfg(feature = "detect")]
pub use detect::{Capabilities, Detect, Tier};

// Re-export proc-macros
#[cfg(feature = "check")]
pub use macros::range_check;

/// Common items for working with ranges.
pub mod prelude {
    pub use crate::primitives::{Absent, Bool, Present};
    pub use crate::protocol::{
        Assignable, BidirectionalRange, ContiguousRange, Finite, ForwardRange, HasLength,
        InputRange, OutputRange, RandomAccessRange, StaticallyInfinite,
    };
    pub use crate::source::{AsRange, AsRangeMut, Slice, SliceMut, SliceWriter};
    pub use crate::adapt::{Count, Generate, Powers, Repeat, Segments, Sequence, Take, ZStrings};
    pub use crate::algo::{
        copy_to, count_lines, distance_between, find_ascii, for_each, is_sorted, reduce,
        selection_sort,
    };
    #[cfg(feature = "alloc")]
    pub use crate::merge::Union;
    #[cfg(feature = "check")]
    pub use macros::range_check;
}
