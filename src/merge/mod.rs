//! # Layer 4: Merge Engine
//!
//! `Union` merges k individually sorted ranges into one sorted range using a
//! binary heap keyed on each child's front element.
//!
//! ```text
//!            heap[0]  <- child with the smallest front element
//!           /       \
//!      heap[1]     heap[2]
//! ```
//!
//! - construction: drop empty children, heapify in O(k)
//! - `first`: front of `heap[0]`
//! - `pop_first`: advance `heap[0]`; remove it if emptied (swap with last,
//!   shrink), then sift down. O(log k)
//!
//! Equal keys are ordered by the child's position in the input, so the
//! merge is stable across children.
//!
//! Heterogeneous children are merged through trait objects:
//!
//! ```
//! use tola_ranges::{Absent, InputRange, Slice, Union};
//!
//! let a = [1, 4, 9];
//! let b = [2, 3];
//! let children: Vec<Box<dyn InputRange<Item = &i32, Infinite = Absent> + '_>> = vec![
//!     Box::new(Slice::new(&a)),
//!     Box::new(Slice::new(&b).take(1)),
//! ];
//! let merged: Vec<i32> = Union::new(children, |x: &&i32, y: &&i32| x < y)
//!     .iter()
//!     .copied()
//!     .collect();
//! assert_eq!(merged, [1, 2, 4, 9]);
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::protocol::InputRange;

/// A child range tagged with its input position.
struct Child<R> {
    index: usize,
    range: R,
}

/// k-way merge of sorted ranges. Input-only.
pub struct Union<R, P> {
    heap: Vec<Child<R>>,
    less: P,
}

impl<R, P> Union<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    /// Merge `children`, each already sorted under `less`.
    pub fn new<I>(children: I, less: P) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let mut total = 0usize;
        let heap: Vec<Child<R>> = children
            .into_iter()
            .enumerate()
            .inspect(|_| total += 1)
            .filter(|(_, range)| range.has_more())
            .map(|(index, range)| Child { index, range })
            .collect();

        tracing::trace!(
            children = total,
            dropped = total - heap.len(),
            "union: building heap"
        );

        let mut union = Union { heap, less };
        for i in (0..union.heap.len() / 2).rev() {
            sift_down(&mut union.heap, &mut union.less, i);
        }
        union
    }

    /// Number of children that still have elements.
    #[inline]
    pub fn active_children(&self) -> usize {
        self.heap.len()
    }
}

impl<R> Union<R, fn(&R::Item, &R::Item) -> bool>
where
    R: InputRange,
    R::Item: Ord,
{
    /// Merge under the natural ascending order of the items.
    pub fn ascending<I>(children: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        fn lt<T: Ord>(a: &T, b: &T) -> bool {
            a < b
        }
        let less: fn(&R::Item, &R::Item) -> bool = lt::<R::Item>;
        Union::new(children, less)
    }
}

impl<R, P> fmt::Debug for Union<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("active_children", &self.heap.len())
            .finish_non_exhaustive()
    }
}

impl<R, P> InputRange for Union<R, P>
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    type Item = R::Item;
    type Infinite = R::Infinite;

    #[inline]
    fn has_more(&self) -> bool {
        !self.heap.is_empty()
    }

    #[inline]
    fn first(&self) -> R::Item {
        debug_assert!(self.has_more(), "first() on an exhausted Union");
        self.heap[0].range.first()
    }

    fn pop_first(&mut self) {
        debug_assert!(self.has_more(), "pop_first() on an exhausted Union");
        let Some(root) = self.heap.first_mut() else {
            return;
        };
        root.range.pop_first();
        if !root.range.has_more() {
            self.heap.swap_remove(0);
        }
        if !self.heap.is_empty() {
            sift_down(&mut self.heap, &mut self.less, 0);
        }
    }
}

// =============================================================================
// Heap Mechanics
// =============================================================================

/// Whether child `a` must come out before child `b`.
///
/// Falls back to input position when neither key is less than the other.
#[inline]
fn precedes<R, P>(heap: &[Child<R>], less: &mut P, a: usize, b: usize) -> bool
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    let (x, y) = (heap[a].range.first(), heap[b].range.first());
    if less(&x, &y) {
        true
    } else if less(&y, &x) {
        false
    } else {
        heap[a].index < heap[b].index
    }
}

/// Restore the heap order below `i`. Indices stay within `heap.len()` no
/// matter what `less` answers.
fn sift_down<R, P>(heap: &mut [Child<R>], less: &mut P, mut i: usize)
where
    R: InputRange,
    P: FnMut(&R::Item, &R::Item) -> bool,
{
    let len = heap.len();
    loop {
        let left = 2 * i + 1;
        let right = left + 1;
        let mut best = i;
        if left < len && precedes(heap, less, left, best) {
            best = left;
        }
        if right < len && precedes(heap, less, right, best) {
            best = right;
        }
        if best == i {
            return;
        }
        heap.swap(i, best);
        i = best;
    }
}
