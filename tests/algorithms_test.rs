//! Terminal algorithms over sources and adapters.

use std::cell::RefCell;

use tola_ranges::prelude::*;
use tola_ranges::{
    call_each, collect_counted, distance_advance_to, find_ascii_advance, find_ascii_ignore_case,
    replace_ascii, replace_ascii_bytes, replace_ascii_len, replace_ascii_to,
    skip_spaces_count_lines, AsciiMatch, RangeError,
};

// =============================================================================
// Folds
// =============================================================================

#[test]
fn test_reduce_sum_and_seed() {
    assert_eq!(reduce([1, 2, 3, 4].as_range(), 0, |acc, x| acc + x), 10);
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce(empty.as_range(), 7, |acc, x| acc + x), 7);
}

#[test]
fn test_reduce_over_owned_items() {
    let labels = reduce(Sequence::new(|i: usize| i.to_string()).take(4), String::new(), |mut acc, s| {
        acc.push_str(&s);
        acc
    });
    assert_eq!(labels, "0123");
}

#[test]
fn test_call_each_with_tuple_args() {
    let log = RefCell::new(Vec::new());
    let push_sum = |(a, b): (i32, i32)| log.borrow_mut().push(a + b);
    let push_diff = |(a, b): (i32, i32)| log.borrow_mut().push(a - b);
    let handlers: [&dyn Fn((i32, i32)); 2] = [&push_sum, &push_diff];
    call_each(handlers.as_range(), (5, 3));
    assert_eq!(*log.borrow(), [8, 2]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_is_sorted_custom_orders() {
    assert!(is_sorted("abcz".as_range(), |c, p| c < p));
    assert!(is_sorted([9, 7, 7, 1].as_range(), |c, p| c > p));
    assert!(!is_sorted([2, 1].as_range(), |c, p| c < p));
    assert!(is_sorted(Sequence::new(|i: usize| i / 3).take(10), |c, p| c < p));
}

#[test]
fn test_selection_sort_vec() {
    let mut v = vec![5, 4, 3, 2, 1];
    selection_sort(&mut v.as_range_mut(), |a, b| a < b);
    assert_eq!(v, [1, 2, 3, 4, 5]);

    let mut pairs = vec![(2, 'b'), (1, 'z'), (2, 'a')];
    selection_sort(&mut pairs.as_range_mut(), |a, b| a.0 < b.0);
    assert_eq!(pairs[0], (1, 'z'));
    assert!(is_sorted(pairs.as_range(), |c, p| c.0 < p.0));
}

// =============================================================================
// Distance
// =============================================================================

#[test]
fn test_distance_contiguous_and_stepping_agree() {
    let data: Vec<u32> = (0..50).collect();
    let from = data.as_range();
    let mut to = from;
    to.advance_by(17);

    let seq_from = Sequence::new(|i: usize| i as u32);
    let mut seq_to = seq_from.clone();
    seq_to.advance_by(17);

    assert_eq!(distance_between(&from, &to), 17);
    assert_eq!(distance_between(&seq_from, &seq_to), 17);

    let mut walker = from;
    assert_eq!(distance_advance_to(&mut walker, &to), 17);
    assert_eq!(*walker.first(), 17);
}

// =============================================================================
// Lines
// =============================================================================

#[test]
fn test_count_lines_mixed_endings() {
    assert_eq!(count_lines("a\r\nb\nc\rd".as_range()), 3);
    assert_eq!(count_lines("one\r\n\r\ntwo\n".as_range()), 3);
    let chars: Vec<char> = "x\ny\r\nz".chars().collect();
    assert_eq!(count_lines(chars.as_range()), 2);
}

#[test]
fn test_skip_spaces_then_continue() {
    let text = "\n\n   let x";
    let mut r = text.as_range();
    assert_eq!(skip_spaces_count_lines(&mut r), 2);
    assert_eq!(r.len(), 5);
    assert_eq!(skip_spaces_count_lines(&mut r), 0);
}

// =============================================================================
// ASCII search / replace
// =============================================================================

#[test]
fn test_find_ascii_multi_pattern() {
    let hit = find_ascii("GET /index HTTP/1.1".as_range(), &["HTTP", "/"]);
    assert_eq!(hit, Some(AsciiMatch { offset: 4, pattern: 1 }));

    let hit = find_ascii_ignore_case("Accept: TEXT/html".as_range(), &["text", "html"]);
    assert_eq!(hit, Some(AsciiMatch { offset: 8, pattern: 0 }));

    assert_eq!(find_ascii("".as_range(), &["a"]), None);
}

#[test]
fn test_find_ascii_advance_tokenizes() {
    let mut r = "a=1&b=2&c=3".as_range();
    let mut starts = Vec::new();
    while let Some(m) = find_ascii_advance(&mut r, &["&", "="]) {
        starts.push((m.offset, m.pattern));
        r.pop_first();
    }
    assert_eq!(starts, [(1, 1), (1, 0), (1, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_replace_ascii_examples() {
    assert_eq!(replace_ascii("abcabc", &[("ab", "X"), ("bc", "Y")]).unwrap(), "XcXc");
    assert_eq!(replace_ascii("a<b>&c", &[("<", "&lt;"), (">", "&gt;"), ("&", "&amp;")]).unwrap(), "a&lt;b&gt;&amp;c");
    assert_eq!(replace_ascii("unchanged", &[]).unwrap(), "unchanged");
}

#[test]
fn test_replace_ascii_streaming_and_counted_agree() {
    let subs = [("\r\n", "\n"), ("\t", "    ")];
    let src = "a\r\n\tb\r\n";
    let n = replace_ascii_len(src.as_range(), &subs);

    let mut out = Vec::new();
    let written = replace_ascii_to(src.as_range(), &subs, &mut out);
    assert_eq!(written, n);
    assert_eq!(out.len(), n);
    assert_eq!(out, b"a\n    b\n");

    let bytes = replace_ascii_bytes(src.as_range(), &subs).unwrap();
    assert_eq!(bytes, out);
}

#[test]
fn test_collect_counted() {
    let v = collect_counted(Repeat::new(3u8).take(4)).unwrap();
    assert_eq!(v, [3, 3, 3, 3]);
}

#[test]
fn test_error_messages() {
    let mut v: Vec<u64> = Vec::new();
    let source = v.try_reserve_exact(usize::MAX).unwrap_err();
    let err = RangeError::Alloc { requested: usize::MAX, source };
    assert!(err.to_string().starts_with("Allocation of"));

    let utf8 = String::from_utf8(vec![0xff]).unwrap_err();
    let err: RangeError = utf8.into();
    assert!(matches!(err, RangeError::Utf8(_)));
}
