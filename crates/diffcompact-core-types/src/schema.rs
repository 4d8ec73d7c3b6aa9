//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the emitting side
//! (compactor, CLI) and the asserting side (test capture).

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison shape
pub const FIELD_CONTEXT_LENGTH: &str = "context_length";
pub const FIELD_EXPECTED_LEN: &str = "expected_len";
pub const FIELD_ACTUAL_LEN: &str = "actual_len";
pub const FIELD_PREFIX_LEN: &str = "prefix_len";
pub const FIELD_SUFFIX_LEN: &str = "suffix_len";
pub const FIELD_SKIP_REASON: &str = "reason";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_COMPACTED: &str = "compacted";
pub const EVENT_COMPACTION_SKIPPED: &str = "compaction_skipped";
