//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Ranges carry these as associated marker types (`Infinite`, `Contiguous`),
//! and sinks carry one as `Bounded`. Algorithms pick an implementation by
//! bounding on `R::Marker: Strategy<R>` with one impl for `Present` and one
//! for `Absent`, or require a combination of markers to hold through
//! [`IsPresent`].

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical NOT
    type Not: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type Not = Absent;
    type Or<Other: Bool> = Present;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type Not = Present;
    type Or<Other: Bool> = Other;
}

/// Implemented only by `Present`; a bound `X: IsPresent` asserts that the
/// type-level expression `X` evaluates to true.
pub trait IsPresent: Bool {}

impl IsPresent for Present {}

/// `A` is false or `B` is true.
pub type Implies<A, B> = <<A as Bool>::Not as Bool>::Or<B>;

#[cfg(test)]
mod tests {
    use super::*;

    fn holds<X: IsPresent>() -> bool {
        X::VALUE
    }

    #[test]
    fn test_values() {
        assert!(Present::VALUE);
        assert!(!Absent::VALUE);
        assert!(!<<Present as Bool>::Not as Bool>::VALUE);
        assert!(<<Absent as Bool>::Not as Bool>::VALUE);
    }

    #[test]
    fn test_or() {
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(<<Present as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
    }

    #[test]
    fn test_implies() {
        assert!(holds::<Implies<Absent, Absent>>());
        assert!(holds::<Implies<Absent, Present>>());
        assert!(holds::<Implies<Present, Present>>());
        assert!(!<Implies<Present, Absent> as Bool>::VALUE);
    }
}
