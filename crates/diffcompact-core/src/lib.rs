//! diffcompact core - compact assertion-failure messages
//!
//! Given an expected and an actual string, renders only the region where
//! they differ plus a bounded amount of unchanged context:
//!
//! ```
//! use diffcompact_core::format_diff;
//!
//! assert_eq!(
//!     format_diff(Some("a"), Some("b"), Some("c"), 0),
//!     "a expected:<[b]> but was:<[c]>"
//! );
//! ```
//!
//! This crate provides:
//! - The comparison compactor and its message template
//! - Equality assertions that report through the compactor
//! - Layered configuration (defaults, TOML file, environment)
//! - The error facility and structured logging facility

pub mod assert;
pub mod compactor;
pub mod config;
pub mod errors;
pub mod logging_facility;

// Re-exported for the logging macros
#[doc(hidden)]
pub use diffcompact_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use assert::{assert_equals, ComparisonFailure};
pub use compactor::{format_diff, Compaction, ComparisonCompactor, Offsets, SkipReason};
pub use config::CompactorConfig;
pub use errors::{DiffCompactError, ExError, ExErrorKind, Result};
