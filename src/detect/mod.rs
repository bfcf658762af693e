//! # Concrete-Type Detection
//!
//! Answers "which capabilities does this concrete type have?" as constants,
//! without requiring the caller to name a bound:
//!
//! ```
//! use tola_ranges::{range_caps, range_tier, Repeat, Slice, Tier};
//!
//! assert_eq!(range_tier!(Slice<'static, u8>), Tier::RandomAccess);
//! assert_eq!(range_tier!(String), Tier::None);
//!
//! let caps = range_caps!(Repeat<i32>);
//! assert!(caps.infinite && !caps.bidirectional);
//! ```
//!
//! Generic code should bound on the tier traits instead; see
//! [`autoref`] for why.

pub mod autoref;
pub mod tier;

pub use autoref::Detect;
pub use tier::{Capabilities, Tier};

/// Query every capability of a concrete type into a [`Capabilities`].
#[macro_export]
macro_rules! range_caps {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::*;
        $crate::detect::Capabilities {
            input: $crate::detect::Detect::<$t>::IS_INPUT_RANGE,
            forward: $crate::detect::Detect::<$t>::IS_FORWARD_RANGE,
            bidirectional: $crate::detect::Detect::<$t>::IS_BIDIRECTIONAL_RANGE,
            random_access: $crate::detect::Detect::<$t>::IS_RANDOM_ACCESS_RANGE,
            length: $crate::detect::Detect::<$t>::IS_HAS_LENGTH,
            contiguous: $crate::detect::Detect::<$t>::IS_CONTIGUOUS_RANGE,
            assignable: $crate::detect::Detect::<$t>::IS_ASSIGNABLE,
            infinite: $crate::detect::Detect::<$t>::IS_STATICALLY_INFINITE,
        }
    }};
}

/// Classify a concrete type into its strongest [`Tier`].
#[macro_export]
macro_rules! range_tier {
    ($t:ty) => {
        $crate::range_caps!($t).tier()
    };
}
