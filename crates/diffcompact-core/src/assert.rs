//! Equality assertions that report failures through the compactor.

use crate::compactor::ComparisonCompactor;
use crate::config::CompactorConfig;
use std::fmt;

/// Two values that were expected to be equal but were not.
///
/// The `Display` form is the compacted failure message, so a failure can be
/// surfaced directly (`{}`) without further formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonFailure {
    message: Option<String>,
    expected: Option<String>,
    actual: Option<String>,
    context_length: usize,
}

impl ComparisonFailure {
    pub fn new(
        message: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
        context_length: usize,
    ) -> Self {
        Self {
            message: message.map(str::to_owned),
            expected: expected.map(str::to_owned),
            actual: actual.map(str::to_owned),
            context_length,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    pub fn context_length(&self) -> usize {
        self.context_length
    }
}

impl fmt::Display for ComparisonFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = ComparisonCompactor::new(self.context_length).compact(
            self.message(),
            self.expected(),
            self.actual(),
        );
        f.write_str(&rendered)
    }
}

impl std::error::Error for ComparisonFailure {}

impl ComparisonCompactor {
    /// Assert that `expected` and `actual` are equal.
    ///
    /// Two absent values count as equal.
    ///
    /// # Errors
    ///
    /// Returns a [`ComparisonFailure`] carrying this compactor's context
    /// length when the values differ.
    pub fn check(
        &self,
        message: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> Result<(), ComparisonFailure> {
        if expected == actual {
            return Ok(());
        }
        Err(ComparisonFailure::new(
            message,
            expected,
            actual,
            self.context_length(),
        ))
    }
}

/// Assert equality using the default configuration.
///
/// ```
/// use diffcompact_core::assert_equals;
///
/// let err = assert_equals(Some("greeting"), Some("hello"), Some("help")).unwrap_err();
/// assert_eq!(err.to_string(), "greeting expected:<hel[lo]> but was:<hel[p]>");
/// ```
///
/// # Errors
///
/// Returns a [`ComparisonFailure`] when the values differ.
pub fn assert_equals(
    message: Option<&str>,
    expected: Option<&str>,
    actual: Option<&str>,
) -> Result<(), ComparisonFailure> {
    CompactorConfig::default()
        .compactor()
        .check(message, expected, actual)
}
