#![allow(clippy::unwrap_used, clippy::expect_used)]

use diffcompact_core::compactor::ComparisonCompactor;
use diffcompact_core::{format_diff, Offsets, SkipReason};

fn compact(context_length: usize, expected: Option<&str>, actual: Option<&str>) -> String {
    ComparisonCompactor::new(context_length).compact(None, expected, actual)
}

#[test]
fn test_message() {
    let failure = ComparisonCompactor::new(0).compact(Some("a"), Some("b"), Some("c"));
    assert_eq!(failure, "a expected:<[b]> but was:<[c]>");
}

#[test]
fn test_start_same() {
    assert_eq!(
        compact(1, Some("ba"), Some("bc")),
        "expected:<b[a]> but was:<b[c]>"
    );
}

#[test]
fn test_end_same() {
    assert_eq!(
        compact(1, Some("ab"), Some("cb")),
        "expected:<[a]b> but was:<[c]b>"
    );
}

#[test]
fn test_same() {
    assert_eq!(compact(1, Some("ab"), Some("ab")), "expected:<ab> but was:<ab>");
}

#[test]
fn test_no_context_start_and_end_same() {
    assert_eq!(
        compact(0, Some("abc"), Some("adc")),
        "expected:<...[b]...> but was:<...[d]...>"
    );
}

#[test]
fn test_start_and_end_context() {
    assert_eq!(
        compact(1, Some("abc"), Some("adc")),
        "expected:<a[b]c> but was:<a[d]c>"
    );
}

#[test]
fn test_start_and_end_context_with_ellipses() {
    assert_eq!(
        compact(1, Some("abcde"), Some("abfde")),
        "expected:<...b[c]d...> but was:<...b[f]d...>"
    );
}

#[test]
fn test_start_same_complete() {
    assert_eq!(
        compact(2, Some("ab"), Some("abc")),
        "expected:<ab[]> but was:<ab[c]>"
    );
}

#[test]
fn test_end_same_complete() {
    assert_eq!(
        compact(0, Some("bc"), Some("abc")),
        "expected:<[]...> but was:<[a]...>"
    );
}

#[test]
fn test_end_same_complete_context() {
    assert_eq!(
        compact(2, Some("bc"), Some("abc")),
        "expected:<[]bc> but was:<[a]bc>"
    );
}

#[test]
fn test_overlapping_matches() {
    assert_eq!(
        compact(0, Some("abc"), Some("abbc")),
        "expected:<...[]...> but was:<...[b]...>"
    );
}

#[test]
fn test_overlapping_matches_context() {
    assert_eq!(
        compact(2, Some("abc"), Some("abbc")),
        "expected:<ab[]c> but was:<ab[b]c>"
    );
}

#[test]
fn test_overlapping_matches_2() {
    assert_eq!(
        compact(0, Some("abcdde"), Some("abcde")),
        "expected:<...[d]...> but was:<...[]...>"
    );
}

#[test]
fn test_overlapping_matches_2_context() {
    assert_eq!(
        compact(2, Some("abcdde"), Some("abcde")),
        "expected:<...cd[d]e> but was:<...cd[]e>"
    );
}

#[test]
fn test_actual_absent() {
    assert_eq!(compact(0, Some("a"), None), "expected:<a> but was:<null>");
}

#[test]
fn test_actual_absent_context() {
    assert_eq!(compact(2, Some("a"), None), "expected:<a> but was:<null>");
}

#[test]
fn test_expected_absent() {
    assert_eq!(compact(0, None, Some("a")), "expected:<null> but was:<a>");
}

#[test]
fn test_expected_absent_context() {
    assert_eq!(compact(2, None, Some("a")), "expected:<null> but was:<a>");
}

#[test]
fn test_both_absent() {
    assert_eq!(compact(2, None, None), "expected:<null> but was:<null>");
}

#[test]
fn test_suffix_longer_than_shorter_string() {
    // Regression: the whole of `actual` matches the tail of `expected`.
    assert_eq!(
        compact(10, Some("S&P500"), Some("0")),
        "expected:<[S&P50]0> but was:<[]0>"
    );
}

#[test]
fn test_empty_against_non_empty() {
    assert_eq!(compact(3, Some(""), Some("abc")), "expected:<[]> but was:<[abc]>");
    assert_eq!(compact(0, Some("abc"), Some("")), "expected:<[abc]> but was:<[]>");
}

#[test]
fn test_literal_null_text_is_compacted() {
    // A present "null" string is an ordinary value, unlike an absent one.
    assert_eq!(
        compact(0, Some("null"), Some("nil")),
        "expected:<...[ul]...> but was:<...[i]...>"
    );
}

#[test]
fn test_format_diff_matches_compactor() {
    let via_fn = format_diff(Some("msg"), Some("abcde"), Some("abfde"), 1);
    let via_type = ComparisonCompactor::new(1).compact(Some("msg"), Some("abcde"), Some("abfde"));
    assert_eq!(via_fn, via_type);
    assert_eq!(via_fn, "msg expected:<...b[c]d...> but was:<...b[f]d...>");
}

#[test]
fn test_compaction_reports_offsets() {
    let compaction = ComparisonCompactor::new(2).compaction(Some("abcdde"), Some("abcde"));
    assert_eq!(compaction.offsets(), Some(Offsets { prefix: 4, suffix: 1 }));
    assert_eq!(compaction.rendered_expected(), "...cd[d]e");
    assert_eq!(compaction.rendered_actual(), "...cd[]e");
}

#[test]
fn test_compaction_reports_skip_reason() {
    let compactor = ComparisonCompactor::new(0);
    assert_eq!(
        compactor.compaction(None, Some("a")).skip_reason(),
        Some(SkipReason::ExpectedAbsent)
    );
    assert_eq!(
        compactor.compaction(Some("a"), None).skip_reason(),
        Some(SkipReason::ActualAbsent)
    );
    assert_eq!(
        compactor.compaction(Some("a"), Some("a")).skip_reason(),
        Some(SkipReason::Equal)
    );
}

#[test]
fn test_compactor_shared_across_threads() {
    let compactor = ComparisonCompactor::new(1);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let actual = format!("ab{i}de");
                compactor.compact(None, Some("abcde"), Some(&actual))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let msg = handle.join().expect("worker panicked");
        assert_eq!(msg, format!("expected:<...b[c]d...> but was:<...b[{i}]d...>"));
    }
}
