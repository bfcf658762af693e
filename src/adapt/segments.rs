//! Delimiter-separated sub-views of a borrowed buffer.
//!
//! `Segments` splits like `str::split`: `"a,,b"` yields `a`, ``, `b` and a
//! trailing delimiter yields a final empty segment. `ZStrings` reads a
//! null-separated string list and stops at the first empty entry, so
//! `"one\0two\0\0junk"` yields `one`, `two`.
//!
//! Each advance re-scans forward from the current position for the next
//! delimiter. Sub-views borrow the buffer and are never copied.

use crate::primitives::Absent;
use crate::protocol::InputRange;

/// Input-only range of sub-slices between delimiters.
#[derive(Debug)]
pub struct Segments<'a, T> {
    /// Unconsumed buffer starting at the current segment; `None` once done.
    rest: Option<&'a [T]>,
    delim: T,
    /// Length of the current segment, cached by the last scan.
    head: usize,
    stop_at_empty: bool,
}

/// Null-separated, double-null terminated string list.
pub type ZStrings<'a> = Segments<'a, u8>;

impl<'a, T: PartialEq> Segments<'a, T> {
    /// Split `buf` at every `delim`.
    pub fn new(buf: &'a [T], delim: T) -> Self {
        let head = scan(buf, &delim);
        Segments {
            rest: Some(buf),
            delim,
            head,
            stop_at_empty: false,
        }
    }
}

impl<'a> Segments<'a, u8> {
    /// Read a list of null-terminated strings ending at an empty one.
    pub fn zstrings(buf: &'a [u8]) -> Self {
        Segments {
            stop_at_empty: true,
            ..Segments::new(buf, 0)
        }
    }
}

#[inline]
fn scan<T: PartialEq>(buf: &[T], delim: &T) -> usize {
    buf.iter().position(|x| x == delim).unwrap_or(buf.len())
}

impl<'a, T: PartialEq> InputRange for Segments<'a, T> {
    type Item = &'a [T];
    type Infinite = Absent;

    #[inline]
    fn has_more(&self) -> bool {
        self.rest.is_some() && !(self.stop_at_empty && self.head == 0)
    }

    #[inline]
    fn first(&self) -> &'a [T] {
        debug_assert!(self.has_more(), "first() on exhausted Segments");
        match self.rest {
            Some(rest) => &rest[..self.head],
            None => &[],
        }
    }

    fn pop_first(&mut self) {
        debug_assert!(self.has_more(), "pop_first() on exhausted Segments");
        let Some(rest) = self.rest else { return };
        if self.head < rest.len() {
            let next = &rest[self.head + 1..];
            self.head = scan(next, &self.delim);
            self.rest = Some(next);
        } else {
            self.rest = None;
            self.head = 0;
        }
    }
}
