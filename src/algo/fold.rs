//! Left folds and side-effect traversals. All of them walk the whole range,
//! so they only accept `Finite` ranges.

use crate::protocol::Finite;

/// Fold the range left to right, calling `f(acc, item)` once per element.
///
/// ```
/// use tola_ranges::{reduce, Slice};
///
/// assert_eq!(reduce(Slice::new(&[1, 2, 3, 4]), 0, |acc, x| acc + x), 10);
/// ```
///
/// Infinite ranges are rejected at compile time:
///
/// ```compile_fail
/// use tola_ranges::{reduce, Repeat};
///
/// reduce(Repeat::new(1), 0, |acc, x| acc + x);
/// ```
pub fn reduce<R, A, F>(mut range: R, seed: A, mut f: F) -> A
where
    R: Finite,
    F: FnMut(A, R::Item) -> A,
{
    let mut acc = seed;
    while let Some(item) = range.next() {
        acc = f(acc, item);
    }
    acc
}

/// Call `f` on every element for its side effects.
pub fn for_each<R, F>(mut range: R, mut f: F)
where
    R: Finite,
    F: FnMut(R::Item),
{
    while let Some(item) = range.next() {
        f(item);
    }
}

/// Treat every element as a callable and invoke it with `args`.
///
/// `args` is cloned once per element; pass a tuple for several arguments.
pub fn call_each<R, A>(mut range: R, args: A)
where
    R: Finite,
    R::Item: FnOnce(A),
    A: Clone,
{
    while let Some(callable) = range.next() {
        callable(args.clone());
    }
}
