//! # Sources
//!
//! Ranges over borrowed storage, and the `AsRange` / `AsRangeMut` entry
//! points that let containers and strings present themselves as
//! random-access contiguous ranges.

pub mod slice;
pub mod writer;

pub use slice::{Slice, SliceMut};
pub use writer::SliceWriter;

/// Containers that can be viewed as a `Slice`.
pub trait AsRange {
    type Elem;

    fn as_range(&self) -> Slice<'_, Self::Elem>;
}

/// Containers that can be viewed as an assignable `SliceMut`.
pub trait AsRangeMut: AsRange {
    fn as_range_mut(&mut self) -> SliceMut<'_, Self::Elem>;
}

impl<T> AsRange for [T] {
    type Elem = T;

    #[inline]
    fn as_range(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> AsRangeMut for [T] {
    #[inline]
    fn as_range_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

impl<T, const N: usize> AsRange for [T; N] {
    type Elem = T;

    #[inline]
    fn as_range(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T, const N: usize> AsRangeMut for [T; N] {
    #[inline]
    fn as_range_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self)
    }
}

/// Strings are viewed as their UTF-8 bytes.
impl AsRange for str {
    type Elem = u8;

    #[inline]
    fn as_range(&self) -> Slice<'_, u8> {
        Slice::new(self.as_bytes())
    }
}

#[cfg(feature = "alloc")]
mod owned {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{AsRange, AsRangeMut, Slice, SliceMut};

    impl<T> AsRange for Vec<T> {
        type Elem = T;

        #[inline]
        fn as_range(&self) -> Slice<'_, T> {
            Slice::new(self)
        }
    }

    impl<T> AsRangeMut for Vec<T> {
        #[inline]
        fn as_range_mut(&mut self) -> SliceMut<'_, T> {
            SliceMut::new(self)
        }
    }

    impl AsRange for String {
        type Elem = u8;

        #[inline]
        fn as_range(&self) -> Slice<'_, u8> {
            Slice::new(self.as_bytes())
        }
    }
}
