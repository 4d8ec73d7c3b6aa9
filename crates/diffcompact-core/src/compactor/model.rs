//! Value types produced by the compaction engine.

/// Marker placed where unchanged context was cut off.
pub const ELLIPSIS: &str = "...";
/// Opens the differing segment.
pub const DELTA_START: &str = "[";
/// Closes the differing segment.
pub const DELTA_END: &str = "]";
/// Rendering of an absent value.
pub const NULL_TEXT: &str = "null";

/// Lengths of the common prefix and common suffix shared by two strings.
///
/// Measured in `char`s. For any two strings the engine produces,
/// `prefix + suffix <= min(expected_len, actual_len)` holds, so the two
/// regions never claim the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offsets {
    pub prefix: usize,
    pub suffix: usize,
}

impl Offsets {
    /// Total number of characters shared at the edges.
    pub fn shared(&self) -> usize {
        self.prefix + self.suffix
    }
}

/// Why a comparison was rendered verbatim instead of compacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    ExpectedAbsent,
    ActualAbsent,
    Equal,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExpectedAbsent => "expected_absent",
            SkipReason::ActualAbsent => "actual_absent",
            SkipReason::Equal => "equal",
        }
    }
}

/// Outcome of comparing two optional strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compaction {
    /// Values are rendered unchanged (`null` standing in for an absent one).
    Skipped {
        reason: SkipReason,
        expected: String,
        actual: String,
    },
    /// Values differ; each side shows only its differing segment plus context.
    Compacted {
        offsets: Offsets,
        expected: String,
        actual: String,
    },
}

impl Compaction {
    pub fn rendered_expected(&self) -> &str {
        match self {
            Compaction::Skipped { expected, .. } | Compaction::Compacted { expected, .. } => {
                expected
            }
        }
    }

    pub fn rendered_actual(&self) -> &str {
        match self {
            Compaction::Skipped { actual, .. } | Compaction::Compacted { actual, .. } => actual,
        }
    }

    /// Prefix/suffix offsets, present only when compaction ran.
    pub fn offsets(&self) -> Option<Offsets> {
        match self {
            Compaction::Compacted { offsets, .. } => Some(*offsets),
            Compaction::Skipped { .. } => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Compaction::Skipped { reason, .. } => Some(*reason),
            Compaction::Compacted { .. } => None,
        }
    }

    pub fn is_compacted(&self) -> bool {
        matches!(self, Compaction::Compacted { .. })
    }
}
