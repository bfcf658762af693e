//! Ordering checks and in-place sorting.

use crate::protocol::{Assignable, Finite};

/// Single pass check that `violates(current, previous)` never holds.
///
/// For ascending order pass `|cur, prev| cur < prev`. Empty and
/// single-element ranges are sorted.
pub fn is_sorted<R, P>(mut range: R, mut violates: P) -> bool
where
    R: Finite,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    let Some(mut previous) = range.next() else {
        return true;
    };
    while let Some(current) = range.next() {
        if violates(&current, &previous) {
            return false;
        }
        previous = current;
    }
    true
}

/// In-place O(n²) selection sort.
///
/// For each position `i`, the smallest remaining element under `less` is
/// swapped into place. Not stable. Meant for small or nearly sorted inputs
/// where avoiding extra storage matters more than speed.
pub fn selection_sort<R, P>(range: &mut R, mut less: P)
where
    R: Assignable + ?Sized,
    P: FnMut(&R::Elem, &R::Elem) -> bool,
{
    let n = range.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if less(range.get(j), range.get(min)) {
                min = j;
            }
        }
        if min != i {
            range.swap_at(i, min);
        }
    }
}
