//! Assertion-message template.

/// Join an optional message prefix with the two rendered values.
///
/// A present message, even an empty one, is followed by a single space.
pub fn format_message(message: Option<&str>, expected: &str, actual: &str) -> String {
    let start = message.map(|m| format!("{m} ")).unwrap_or_default();
    format!("{start}expected:<{expected}> but was:<{actual}>")
}
