//! Autoref-free capability detection on concrete types.
//!
//! Implements the "Inherent Const Fallback" pattern:
//!
//! 1. A fallback trait per capability with `const IS_X: bool = false`,
//!    implemented for every `Detect<T>`.
//! 2. An inherent `const IS_X: bool = true` on `Detect<T>` where `T: X`.
//!
//! Resolving `Detect::<Concrete>::IS_X` picks the inherent const when the
//! bound holds and the trait const otherwise. The fallback traits must be in
//! scope; `range_caps!` and `range_tier!` import them for you.
//!
//! ## Limitation
//!
//! Only concrete types resolve. Inside `fn foo<T>()` the inherent impl is
//! never selected, so every query reports `false`.

use core::marker::PhantomData;

use crate::protocol::{
    Assignable, BidirectionalRange, ContiguousRange, ForwardRange, HasLength, InputRange,
    RandomAccessRange, StaticallyInfinite,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one capability trait.
macro_rules! impl_detect {
    ($Trait:ident => $CONST:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] {
                const $CONST: bool = false;
            }

            impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}

            impl<T: ?Sized + $Trait> Detect<T> {
                pub const $CONST: bool = true;
            }
        }
    };
}

impl_detect!(InputRange => IS_INPUT_RANGE);
impl_detect!(ForwardRange => IS_FORWARD_RANGE);
impl_detect!(BidirectionalRange => IS_BIDIRECTIONAL_RANGE);
impl_detect!(RandomAccessRange => IS_RANDOM_ACCESS_RANGE);
impl_detect!(HasLength => IS_HAS_LENGTH);
impl_detect!(ContiguousRange => IS_CONTIGUOUS_RANGE);
impl_detect!(Assignable => IS_ASSIGNABLE);
impl_detect!(StaticallyInfinite => IS_STATICALLY_INFINITE);
