//! Comparison compactor.
//!
//! Turns an expected/actual pair into a short failure message that shows
//! only where the two strings diverge.
//!
//! ## Entry point
//!
//! ```
//! use diffcompact_core::compactor::ComparisonCompactor;
//!
//! let compactor = ComparisonCompactor::new(1);
//! let msg = compactor.compact(None, Some("abcde"), Some("abfde"));
//! assert_eq!(msg, "expected:<...b[c]d...> but was:<...b[f]d...>");
//! ```
//!
//! ## Guarantees
//!
//! - **No failures**: every input, including absent values, empty strings and
//!   a context length of zero, produces a message.
//! - **Non-overlapping edges**: the common prefix and common suffix never
//!   claim the same character.
//! - **Context from expected**: leading and trailing context are always
//!   taken from the expected string.

pub mod engine;
pub mod message;
pub mod model;

pub use engine::{format_diff, ComparisonCompactor};
pub use message::format_message;
pub use model::{Compaction, Offsets, SkipReason};
