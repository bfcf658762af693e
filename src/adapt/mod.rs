//! # Layer 3: Adapters
//!
//! | Adapter | Tier | Infinite |
//! |---------|------|----------|
//! | `Take` | same as child | never |
//! | `Generate` | input | yes |
//! | `Sequence` | random access | yes |
//! | `Repeat` | random access | yes |
//! | `Powers` | forward | yes |
//! | `Segments` / `ZStrings` | input | no |
//! | `Count` | sink | - |

pub mod count;
pub mod generate;
pub mod repeat;
pub mod segments;
pub mod take;

pub use count::Count;
pub use generate::{Generate, Sequence};
pub use repeat::{Powers, Repeat};
pub use segments::{Segments, ZStrings};
pub use take::{Take, TakeLength};
