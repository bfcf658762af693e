//! ASCII multi-pattern search and replace.
//!
//! Patterns are ASCII `&str`s matched unit by unit against any forward range
//! of [`CharUnit`]s. At each position the patterns are tried in the order
//! given, so the earliest match start wins and ties go to the first listed
//! pattern. Empty patterns never match.
//!
//! Replacement runs in two passes when it allocates: the output is first
//! produced into a [`Count`](crate::adapt::Count) to learn its exact length,
//! storage is reserved once, then the output is produced for real.

use crate::adapt::Count;
use crate::algo::lines::CharUnit;
use crate::protocol::{Finite, ForwardRange, OutputRange};

#[cfg(feature = "alloc")]
use {
    crate::error::{RangeResult, ReserveResultExt},
    crate::source::AsRange,
    alloc::{string::String, vec::Vec},
};

/// Position and identity of a pattern match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiMatch {
    /// Units skipped before the match starts.
    pub offset: usize,
    /// Index of the matching pattern in the pattern list.
    pub pattern: usize,
}

#[inline]
fn fold_case(code: u32) -> u32 {
    if (u32::from(b'A')..=u32::from(b'Z')).contains(&code) {
        code + 32
    } else {
        code
    }
}

/// Whether `pattern` occurs at the front of `range`. Never consumes `range`.
fn matches_at<R>(range: &R, pattern: &[u8], ignore_case: bool) -> bool
where
    R: ForwardRange,
    R::Item: CharUnit,
{
    debug_assert!(pattern.is_ascii(), "non-ASCII pattern");
    if pattern.is_empty() {
        return false;
    }
    let mut cursor = range.clone();
    for &byte in pattern {
        if !cursor.has_more() {
            return false;
        }
        let (have, want) = (cursor.first().code(), u32::from(byte));
        let equal = if ignore_case {
            fold_case(have) == fold_case(want)
        } else {
            have == want
        };
        if !equal {
            return false;
        }
        cursor.pop_first();
    }
    true
}

fn scan<R>(range: &mut R, patterns: &[&str], ignore_case: bool) -> Option<AsciiMatch>
where
    R: ForwardRange + Finite,
    R::Item: CharUnit,
{
    let mut offset = 0;
    while range.has_more() {
        let hit = patterns
            .iter()
            .position(|p| matches_at(range, p.as_bytes(), ignore_case));
        if let Some(pattern) = hit {
            return Some(AsciiMatch { offset, pattern });
        }
        range.pop_first();
        offset += 1;
    }
    None
}

/// Find the earliest occurrence of any of `patterns`.
///
/// ```
/// use tola_ranges::{find_ascii, AsRange, AsciiMatch};
///
/// let hit = find_ascii("key = value".as_range(), &["=", " "]);
/// assert_eq!(hit, Some(AsciiMatch { offset: 3, pattern: 1 }));
/// assert_eq!(find_ascii("abc".as_range(), &["x"]), None);
/// ```
#[inline]
pub fn find_ascii<R>(mut range: R, patterns: &[&str]) -> Option<AsciiMatch>
where
    R: ForwardRange + Finite,
    R::Item: CharUnit,
{
    scan(&mut range, patterns, false)
}

/// [`find_ascii`] with ASCII letters compared case-insensitively.
#[inline]
pub fn find_ascii_ignore_case<R>(mut range: R, patterns: &[&str]) -> Option<AsciiMatch>
where
    R: ForwardRange + Finite,
    R::Item: CharUnit,
{
    scan(&mut range, patterns, true)
}

/// Advance `range` to the start of the earliest match.
///
/// On a miss the range is left exhausted.
#[inline]
pub fn find_ascii_advance<R>(range: &mut R, patterns: &[&str]) -> Option<AsciiMatch>
where
    R: ForwardRange + Finite,
    R::Item: CharUnit,
{
    scan(range, patterns, false)
}

/// Stream `range` into `out`, replacing every non-overlapping occurrence of
/// a `(from, to)` pattern with its replacement. Returns the bytes written.
///
/// Stops as soon as `out` reports `is_full`, possibly in the middle of a
/// replacement; the result then counts only the bytes that fit.
pub fn replace_ascii_to<'a, R, O>(mut range: R, subs: &[(&str, &str)], out: &mut O) -> usize
where
    R: ForwardRange<Item = &'a u8> + Finite,
    O: OutputRange<u8> + ?Sized,
{
    let mut written = 0;
    while range.has_more() {
        let hit = subs
            .iter()
            .find(|(from, _)| matches_at(&range, from.as_bytes(), false));
        match hit {
            Some((from, to)) => {
                for &byte in to.as_bytes() {
                    if out.is_full() {
                        return written;
                    }
                    out.put(byte);
                    written += 1;
                }
                for _ in 0..from.len() {
                    range.pop_first();
                }
            }
            None => {
                if out.is_full() {
                    return written;
                }
                out.put(*range.first());
                range.pop_first();
                written += 1;
            }
        }
    }
    written
}

/// Length of the output `replace_ascii_to` would produce, without storing it.
#[inline]
pub fn replace_ascii_len<'a, R>(range: R, subs: &[(&str, &str)]) -> usize
where
    R: ForwardRange<Item = &'a u8> + Finite,
{
    let mut count = Count::new();
    replace_ascii_to(range, subs, &mut count);
    count.count()
}

/// Replace into a freshly allocated buffer sized by a counting pass.
#[cfg(feature = "alloc")]
pub fn replace_ascii_bytes<'a, R>(range: R, subs: &[(&str, &str)]) -> RangeResult<Vec<u8>>
where
    R: ForwardRange<Item = &'a u8> + Finite,
{
    let n = replace_ascii_len(range.clone(), subs);
    tracing::debug!(len = n, patterns = subs.len(), "replace_ascii: counted output");

    let mut out = Vec::new();
    out.try_reserve_exact(n).map_alloc_err(n)?;
    let written = replace_ascii_to(range, subs, &mut out);
    debug_assert_eq!(written, n);
    debug_assert_eq!(out.len(), n);
    Ok(out)
}

/// Replace patterns in a string.
///
/// ```
/// use tola_ranges::replace_ascii;
///
/// let out = replace_ascii("abcabc", &[("ab", "X"), ("bc", "Y")]).unwrap();
/// assert_eq!(out, "XcXc");
/// ```
#[cfg(feature = "alloc")]
pub fn replace_ascii(src: &str, subs: &[(&str, &str)]) -> RangeResult<String> {
    let bytes = replace_ascii_bytes(src.as_range(), subs)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::InputRange;
    use crate::source::{AsRange, Slice, SliceWriter};

    #[test]
    fn test_find_earliest_then_first_listed() {
        let hay = "the cat sat";
        assert_eq!(
            find_ascii(hay.as_range(), &["sat", "cat"]),
            Some(AsciiMatch { offset: 4, pattern: 1 })
        );
        assert_eq!(
            find_ascii(hay.as_range(), &["ca", "cat"]),
            Some(AsciiMatch { offset: 4, pattern: 0 })
        );
        assert_eq!(find_ascii(hay.as_range(), &["dog"]), None);
        assert_eq!(find_ascii(hay.as_range(), &[]), None);
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert_eq!(find_ascii("abc".as_range(), &[""]), None);
        assert_eq!(
            find_ascii("abc".as_range(), &["", "c"]),
            Some(AsciiMatch { offset: 2, pattern: 1 })
        );
    }

    #[test]
    fn test_pattern_longer_than_rest() {
        assert_eq!(find_ascii("ab".as_range(), &["abc"]), None);
    }

    #[test]
    fn test_ignore_case_and_wide_units() {
        assert_eq!(
            find_ascii_ignore_case("Content-TYPE".as_range(), &["type"]),
            Some(AsciiMatch { offset: 8, pattern: 0 })
        );
        assert_eq!(find_ascii("Content-TYPE".as_range(), &["type"]), None);

        let chars = ['é', 'a', '=', 'b'];
        assert_eq!(
            find_ascii(Slice::new(&chars), &["="]),
            Some(AsciiMatch { offset: 2, pattern: 0 })
        );
    }

    #[test]
    fn test_find_advance_leaves_range_at_match() {
        let mut r = "abc;def;".as_range();
        let hit = find_ascii_advance(&mut r, &[";"]);
        assert_eq!(hit, Some(AsciiMatch { offset: 3, pattern: 0 }));
        assert_eq!(*r.first(), b';');

        r.pop_first();
        assert_eq!(find_ascii_advance(&mut r, &[";"]).map(|m| m.offset), Some(3));

        let mut miss = "xyz".as_range();
        assert_eq!(find_ascii_advance(&mut miss, &["q"]), None);
        assert!(!miss.has_more());
    }

    #[test]
    fn test_replace_into_bounded_sink() {
        let mut buf = [0u8; 8];
        let mut w = SliceWriter::new(&mut buf);
        let n = replace_ascii_to("a-b-c".as_range(), &[("-", "::")], &mut w);
        assert_eq!(n, 7);
        assert_eq!(&buf[..7], b"a::b::c");
    }

    #[test]
    fn test_replace_stops_at_full_sink() {
        let mut buf = [0u8; 4];
        let mut w = SliceWriter::new(&mut buf);
        let n = replace_ascii_to("a-b-c".as_range(), &[("-", "::")], &mut w);
        assert_eq!(n, 4);
        assert!(w.is_full());
        assert_eq!(&buf, b"a::b");

        let mut split = [0u8; 2];
        let n = replace_ascii_to("-x".as_range(), &[("-", "::")], &mut SliceWriter::new(&mut split));
        assert_eq!(n, 2);
        assert_eq!(&split, b"::");

        let mut none: [u8; 0] = [];
        assert_eq!(replace_ascii_to("abc".as_range(), &[], &mut SliceWriter::new(&mut none)), 0);
    }

    #[test]
    fn test_replace_len_matches_output() {
        let subs = [("ab", "X"), ("bc", "Y")];
        assert_eq!(replace_ascii_len("abcabc".as_range(), &subs), 4);
        assert_eq!(replace_ascii_len("".as_range(), &subs), 0);
        assert_eq!(replace_ascii_len("zzz".as_range(), &[("", "!")]), 3);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_replace_ascii() {
        assert_eq!(
            replace_ascii("abcabc", &[("ab", "X"), ("bc", "Y")]).unwrap(),
            "XcXc"
        );
        assert_eq!(replace_ascii("aaa", &[("aa", "b")]).unwrap(), "ba");
        assert_eq!(replace_ascii("naïve", &[("v", "V")]).unwrap(), "naïVe");
        assert_eq!(replace_ascii("", &[("a", "b")]).unwrap(), "");
    }
}
