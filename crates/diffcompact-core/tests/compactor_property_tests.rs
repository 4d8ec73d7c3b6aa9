//! Property tests for the comparison compactor.
//!
//! Inputs are drawn from a small alphabet so that repeated runs (the case
//! the suffix guard exists for) show up often, and so that the markers
//! `[`, `]` and `...` never occur in the input itself.

use diffcompact_core::compactor::{format_message, ComparisonCompactor};
use diffcompact_core::Offsets;
use proptest::prelude::*;

const TEXT: &str = "[abc]{0,10}";

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn slice(s: &[char], from: usize, to: usize) -> String {
    s[from..to].iter().collect()
}

proptest! {
    #[test]
    fn prop_equal_inputs_never_compact(s in TEXT, ctx in 0usize..12, msg in proptest::option::of("[a-z]{0,5}")) {
        let compactor = ComparisonCompactor::new(ctx);
        let rendered = compactor.compact(msg.as_deref(), Some(&s), Some(&s));
        prop_assert_eq!(rendered, format_message(msg.as_deref(), &s, &s));
        prop_assert!(!compactor.compaction(Some(&s), Some(&s)).is_compacted());
    }

    #[test]
    fn prop_absent_side_renders_null(s in TEXT, ctx in 0usize..12) {
        let compactor = ComparisonCompactor::new(ctx);
        let expected_msg = format!("expected:<{}> but was:<null>", s);
        prop_assert_eq!(compactor.compact(None, Some(&s), None), expected_msg);
        let actual_msg = format!("expected:<null> but was:<{}>", s);
        prop_assert_eq!(compactor.compact(None, None, Some(&s)), actual_msg);
    }

    #[test]
    fn prop_prefix_and_suffix_never_overlap(e in TEXT, a in TEXT) {
        prop_assume!(e != a);
        let (e, a) = (chars(&e), chars(&a));
        let offsets = Offsets::find(&e, &a);
        prop_assert!(offsets.shared() <= e.len().min(a.len()));
    }

    #[test]
    fn prop_offsets_are_maximal(e in TEXT, a in TEXT) {
        prop_assume!(e != a);
        let (e, a) = (chars(&e), chars(&a));
        let Offsets { prefix, suffix } = Offsets::find(&e, &a);

        prop_assert_eq!(&e[..prefix], &a[..prefix]);
        if prefix < e.len().min(a.len()) {
            prop_assert_ne!(e[prefix], a[prefix]);
        }

        prop_assert_eq!(&e[e.len() - suffix..], &a[a.len() - suffix..]);
        if prefix + suffix < e.len().min(a.len()) {
            prop_assert_ne!(e[e.len() - 1 - suffix], a[a.len() - 1 - suffix]);
        }
    }

    #[test]
    fn prop_full_context_reconstructs_both_strings(e in TEXT, a in TEXT) {
        prop_assume!(e != a);
        let compaction = ComparisonCompactor::new(usize::MAX).compaction(Some(&e), Some(&a));
        let (e, a) = (chars(&e), chars(&a));
        let Offsets { prefix, suffix } = compaction.offsets().expect("unequal strings compact");

        let expected = format!(
            "{}[{}]{}",
            slice(&e, 0, prefix),
            slice(&e, prefix, e.len() - suffix),
            slice(&e, e.len() - suffix, e.len()),
        );
        let actual = format!(
            "{}[{}]{}",
            slice(&a, 0, prefix),
            slice(&a, prefix, a.len() - suffix),
            slice(&a, a.len() - suffix, a.len()),
        );
        prop_assert_eq!(compaction.rendered_expected(), expected);
        prop_assert_eq!(compaction.rendered_actual(), actual);
    }

    #[test]
    fn prop_ellipsis_iff_context_truncated(e in TEXT, a in TEXT, ctx in 0usize..6) {
        prop_assume!(e != a);
        let compaction = ComparisonCompactor::new(ctx).compaction(Some(&e), Some(&a));
        let Offsets { prefix, suffix } = compaction.offsets().expect("unequal strings compact");

        for side in [compaction.rendered_expected(), compaction.rendered_actual()] {
            prop_assert_eq!(side.starts_with("..."), prefix > ctx);
            prop_assert_eq!(side.ends_with("..."), suffix > ctx);
        }
    }

    #[test]
    fn prop_context_never_exceeds_limit(e in TEXT, a in TEXT, ctx in 0usize..6) {
        prop_assume!(e != a);
        let compaction = ComparisonCompactor::new(ctx).compaction(Some(&e), Some(&a));
        for side in [compaction.rendered_expected(), compaction.rendered_actual()] {
            let open = side.find('[').expect("opening bracket");
            let close = side.rfind(']').expect("closing bracket");
            let leading = side[..open].trim_start_matches("...");
            let trailing = side[close + 1..].trim_end_matches("...");
            prop_assert!(leading.chars().count() <= ctx);
            prop_assert!(trailing.chars().count() <= ctx);
        }
    }
}
