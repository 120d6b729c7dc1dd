// logledger - lib.rs
//
// Library entry point. The whole crate is an in-process log buffer:
// record leveled messages with optional context hints, then query,
// count, render, or clear them. No persistence, no network surface.

pub mod core;

pub use crate::core::model::{LogEntry, Severity, SourceLocation};
pub use crate::core::store::LogStore;
