//! Comparison compaction engine.
//!
//! The core entry point is [`ComparisonCompactor::compaction`], which takes
//! two optional strings and produces a [`Compaction`]. Everything here works
//! on `char`s, so a multi-byte character is never split by a bracket or an
//! ellipsis.

use crate::compactor::message::format_message;
use crate::compactor::model::{
    Compaction, Offsets, SkipReason, DELTA_END, DELTA_START, ELLIPSIS, NULL_TEXT,
};
use diffcompact_core_types::schema::{EVENT_COMPACTED, EVENT_COMPACTION_SKIPPED};

/// Renders the difference between an expected and an actual string with a
/// bounded amount of surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonCompactor {
    context_length: usize,
}

impl ComparisonCompactor {
    /// Context length used when none is configured.
    pub const DEFAULT_CONTEXT_LENGTH: usize = 20;

    pub fn new(context_length: usize) -> Self {
        Self { context_length }
    }

    pub fn context_length(&self) -> usize {
        self.context_length
    }

    /// Build the full failure message, e.g. `a expected:<[b]> but was:<[c]>`.
    pub fn compact(
        &self,
        message: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> String {
        let compaction = self.compaction(expected, actual);
        format_message(
            message,
            compaction.rendered_expected(),
            compaction.rendered_actual(),
        )
    }

    /// Compare two optional strings and render both sides.
    ///
    /// Absent values and equal values are passed through verbatim; only two
    /// present, unequal strings are compacted.
    pub fn compaction(&self, expected: Option<&str>, actual: Option<&str>) -> Compaction {
        let (expected, actual) = match (expected, actual) {
            (None, actual) => {
                return self.skipped(SkipReason::ExpectedAbsent, None, actual);
            }
            (expected, None) => {
                return self.skipped(SkipReason::ActualAbsent, expected, None);
            }
            (Some(e), Some(a)) if e == a => {
                return self.skipped(SkipReason::Equal, Some(e), Some(a));
            }
            (Some(e), Some(a)) => (e, a),
        };

        let expected: Vec<char> = expected.chars().collect();
        let actual: Vec<char> = actual.chars().collect();
        let offsets = Offsets::find(&expected, &actual);

        tracing::debug!(
            component = module_path!(),
            event = EVENT_COMPACTED,
            context_length = self.context_length,
            expected_len = expected.len(),
            actual_len = actual.len(),
            prefix_len = offsets.prefix,
            suffix_len = offsets.suffix,
        );

        let frame = Frame::new(&expected, offsets, self.context_length);
        Compaction::Compacted {
            offsets,
            expected: frame.render(&expected),
            actual: frame.render(&actual),
        }
    }

    fn skipped(
        &self,
        reason: SkipReason,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> Compaction {
        tracing::debug!(
            component = module_path!(),
            event = EVENT_COMPACTION_SKIPPED,
            context_length = self.context_length,
            reason = reason.as_str(),
        );

        Compaction::Skipped {
            reason,
            expected: expected.unwrap_or(NULL_TEXT).to_string(),
            actual: actual.unwrap_or(NULL_TEXT).to_string(),
        }
    }
}

impl Default for ComparisonCompactor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONTEXT_LENGTH)
    }
}

/// One-shot form of [`ComparisonCompactor::compact`].
///
/// ```
/// use diffcompact_core::format_diff;
///
/// let msg = format_diff(None, Some("abcdde"), Some("abcde"), 2);
/// assert_eq!(msg, "expected:<...cd[d]e> but was:<...cd[]e>");
/// ```
pub fn format_diff(
    message: Option<&str>,
    expected: Option<&str>,
    actual: Option<&str>,
    context_length: usize,
) -> String {
    ComparisonCompactor::new(context_length).compact(message, expected, actual)
}

impl Offsets {
    /// Find the common prefix, then the longest common suffix that does not
    /// reach into the prefix.
    ///
    /// With repeated runs (`"abcdde"` vs `"abcde"`) the suffix scan would
    /// otherwise keep matching past the real diff boundary.
    pub fn find(expected: &[char], actual: &[char]) -> Self {
        let prefix = common_prefix(expected, actual);
        let suffix = common_suffix(expected, actual, prefix);
        Offsets { prefix, suffix }
    }
}

fn common_prefix(expected: &[char], actual: &[char]) -> usize {
    expected
        .iter()
        .zip(actual)
        .take_while(|(e, a)| e == a)
        .count()
}

// Stops once either string has only `prefix` characters left unclaimed.
fn common_suffix(expected: &[char], actual: &[char], prefix: usize) -> usize {
    let available = expected.len().min(actual.len()) - prefix;
    expected
        .iter()
        .rev()
        .zip(actual.iter().rev())
        .take(available)
        .take_while(|(e, a)| e == a)
        .count()
}

/// Leading and trailing context shared by both rendered sides.
///
/// Context always comes from `expected`: the prefix and suffix regions are
/// identical in both strings by construction.
struct Frame {
    offsets: Offsets,
    leading: String,
    trailing: String,
}

impl Frame {
    fn new(expected: &[char], offsets: Offsets, context_length: usize) -> Self {
        let prefix = offsets.prefix;
        let mut leading = String::new();
        if prefix > context_length {
            leading.push_str(ELLIPSIS);
        }
        leading.extend(&expected[prefix.saturating_sub(context_length)..prefix]);

        let suffix_start = expected.len() - offsets.suffix;
        let context_end = suffix_start.saturating_add(context_length);
        let mut trailing: String = expected[suffix_start..context_end.min(expected.len())]
            .iter()
            .collect();
        if context_end < expected.len() {
            trailing.push_str(ELLIPSIS);
        }

        Self {
            offsets,
            leading,
            trailing,
        }
    }

    fn render(&self, source: &[char]) -> String {
        let middle = &source[self.offsets.prefix..source.len() - self.offsets.suffix];

        let mut out = String::new();
        out.push_str(&self.leading);
        out.push_str(DELTA_START);
        out.extend(middle);
        out.push_str(DELTA_END);
        out.push_str(&self.trailing);
        out
    }
}
