//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `range_check!` | function macro | Check tiers of a concrete type |

mod range_check;

pub use range_check::{expand_range_check, RangeCheckInput};
