//! # Layer 5: Generic Algorithms
//!
//! Written once against the tier traits. Anything that walks a range to its
//! end bounds on `Finite`; anything that re-reads a position bounds on
//! `ForwardRange`.

pub mod ascii;
pub mod copy;
pub mod distance;
pub mod fold;
pub mod lines;
pub mod order;

pub use ascii::{
    find_ascii, find_ascii_advance, find_ascii_ignore_case, replace_ascii_len, replace_ascii_to,
    AsciiMatch,
};
#[cfg(feature = "alloc")]
pub use ascii::{replace_ascii, replace_ascii_bytes};
#[cfg(feature = "alloc")]
pub use copy::collect_counted;
pub use copy::copy_to;
pub use distance::{distance_advance_to, distance_between, DistanceStrategy};
pub use fold::{call_each, for_each, reduce};
pub use lines::{count_lines, skip_spaces_count_lines, CharUnit};
pub use order::{is_sorted, selection_sort};
