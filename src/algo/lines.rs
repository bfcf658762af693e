//! Line counting over ranges of code units.
//!
//! A line break is `\r`, `\n`, or the pair `\r\n` (counted once).

use crate::protocol::{Finite, InputRange};

/// A text code unit that can be compared against ASCII.
pub trait CharUnit {
    /// The unit's code point value.
    fn code(&self) -> u32;

    #[inline]
    fn is_ascii_space(&self) -> bool {
        matches!(self.code(), 0x20 | 0x09 | 0x0A | 0x0B | 0x0C | 0x0D)
    }
}

impl CharUnit for u8 {
    #[inline]
    fn code(&self) -> u32 {
        u32::from(*self)
    }
}

impl CharUnit for u16 {
    #[inline]
    fn code(&self) -> u32 {
        u32::from(*self)
    }
}

impl CharUnit for u32 {
    #[inline]
    fn code(&self) -> u32 {
        *self
    }
}

impl CharUnit for char {
    #[inline]
    fn code(&self) -> u32 {
        u32::from(*self)
    }
}

impl<T: CharUnit + ?Sized> CharUnit for &T {
    #[inline]
    fn code(&self) -> u32 {
        (**self).code()
    }
}

const CR: u32 = b'\r' as u32;
const LF: u32 = b'\n' as u32;

/// Number of line breaks in `range`.
///
/// ```
/// use tola_ranges::{count_lines, AsRange};
///
/// assert_eq!(count_lines("a\r\nb\nc\rd".as_range()), 3);
/// ```
pub fn count_lines<R>(mut range: R) -> usize
where
    R: Finite,
    R::Item: CharUnit,
{
    let mut lines = 0;
    let mut after_cr = false;
    while let Some(unit) = range.next() {
        match unit.code() {
            CR => {
                lines += 1;
                after_cr = true;
            }
            LF => {
                if !after_cr {
                    lines += 1;
                }
                after_cr = false;
            }
            _ => after_cr = false,
        }
    }
    lines
}

/// Skip leading ASCII whitespace, returning how many line breaks were
/// crossed. `range` is left at the first non-space unit.
///
/// ```
/// use tola_ranges::{skip_spaces_count_lines, AsRange, InputRange};
///
/// let mut r = "\n  x".as_range();
/// assert_eq!(skip_spaces_count_lines(&mut r), 1);
/// assert_eq!(*r.first(), b'x');
/// ```
///
/// An endless run of spaces never ends the skip, so infinite ranges are
/// rejected:
///
/// ```compile_fail
/// use tola_ranges::{skip_spaces_count_lines, Repeat};
///
/// skip_spaces_count_lines(&mut Repeat::new(b' '));
/// ```
pub fn skip_spaces_count_lines<R>(range: &mut R) -> usize
where
    R: Finite + ?Sized,
    R::Item: CharUnit,
{
    let mut lines = 0;
    let mut after_cr = false;
    while range.has_more() {
        let unit = range.first();
        if !unit.is_ascii_space() {
            break;
        }
        match unit.code() {
            CR => {
                lines += 1;
                after_cr = true;
            }
            LF => {
                if !after_cr {
                    lines += 1;
                }
                after_cr = false;
            }
            _ => after_cr = false,
        }
        range.pop_first();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{AsRange, Slice};

    #[test]
    fn test_mixed_line_endings() {
        assert_eq!(count_lines("a\r\nb\nc\rd".as_range()), 3);
        assert_eq!(count_lines("".as_range()), 0);
        assert_eq!(count_lines("no breaks".as_range()), 0);
        assert_eq!(count_lines("\n\n".as_range()), 2);
        assert_eq!(count_lines("\r\r\n".as_range()), 2);
        assert_eq!(count_lines("\n\r".as_range()), 2);
    }

    #[test]
    fn test_wide_units() {
        let utf16: [u16; 4] = [0x61, 0x0D, 0x0A, 0x62];
        assert_eq!(count_lines(Slice::new(&utf16)), 1);

        let chars = ['x', '\n', 'y', '\r'];
        assert_eq!(count_lines(Slice::new(&chars)), 2);
    }

    #[test]
    fn test_skip_spaces() {
        let mut r = "  \r\n\t\n  x y".as_range();
        assert_eq!(skip_spaces_count_lines(&mut r), 2);
        assert_eq!(*r.first(), b'x');

        let mut nothing = "x".as_range();
        assert_eq!(skip_spaces_count_lines(&mut nothing), 0);
        assert_eq!(*nothing.first(), b'x');

        let mut all = " \n ".as_range();
        assert_eq!(skip_spaces_count_lines(&mut all), 1);
        assert!(!all.has_more());
    }
}
