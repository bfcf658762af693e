//! Procedural macros for the tola-ranges capability model
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `range_check!` | expression | Evaluate a tier expression for a concrete type |
//!
//! ## Example
//!
//! ```ignore
//! use tola_ranges::{range_check, Repeat, Slice};
//!
//! assert!(range_check!(Slice<'static, u8>: RandomAccess & Contiguous & Finite));
//! assert!(range_check!(Repeat<i32>: Infinite & !Bidirectional));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

/// Check at compile time whether a concrete type satisfies a capability
/// expression.
///
/// # Syntax: `range_check!(Type: Expr, ...)`
///
/// Capability names map onto the tier traits of `tola_ranges`:
///
/// | Name | Trait |
/// |------|-------|
/// | `Input` | `InputRange` |
/// | `Forward` | `ForwardRange` |
/// | `Bidirectional` | `BidirectionalRange` |
/// | `RandomAccess` | `RandomAccessRange` |
/// | `Length` | `HasLength` |
/// | `Contiguous` | `ContiguousRange` |
/// | `Assignable` | `Assignable` |
/// | `Infinite` | `StaticallyInfinite` |
/// | `Finite` | `Finite` |
///
/// Any other path is used as a trait bound directly, e.g.
/// `range_check!(Count: OutputRange<u8>)`.
///
/// Multiple checks separated by commas must all hold.
///
/// ```ignore
/// assert!(range_check!(Slice<'static, i32>: Forward & !Infinite));
/// assert!(range_check!(Sequence<fn(usize) -> usize>: RandomAccess & (Infinite | Length)));
/// assert!(range_check!(Count: !Input, Slice<'static, u8>: Input));
/// ```
#[proc_macro]
pub fn range_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::RangeCheckInput);
    user::expand_range_check(input).into()
}
