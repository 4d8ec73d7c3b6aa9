//! Core types shared across diffcompact facilities
//!
//! This crate provides the canonical field keys and event names used by
//! the logging facility and by anything that asserts on captured events.

pub mod schema;
