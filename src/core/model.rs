// logledger - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across the store and renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::Location;

// =============================================================================
// Severity
// =============================================================================

/// Severity levels, ordered from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    /// Returns all variants in display order (most severe first).
    pub fn all() -> &'static [Severity] {
        &[Severity::Error, Severity::Warn, Severity::Info]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warn => "Warn",
            Severity::Info => "Info",
        }
    }

    /// Fixed-width label for rendered lines.
    pub fn short_label(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN ",
            Severity::Info => "INFO ",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Source location
// =============================================================================

/// The file and line of the call site that produced a log entry.
///
/// Captured via `#[track_caller]` on the record operations, so it names
/// the caller's invocation site rather than anything inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// Source file path, as reported by the compiler at the call site.
    pub file: String,

    /// 1-based line number. 0 for the unknown placeholder.
    pub line: u32,
}

impl SourceLocation {
    /// Placeholder for entries synthesized with no meaningful call site.
    pub fn unknown() -> Self {
        Self {
            file: "<unknown>".to_string(),
            line: 0,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

// =============================================================================
// Log entry
// =============================================================================

/// A single recorded log entry.
///
/// Insertion order within the store is the only identity; entries carry
/// no explicit ID.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Severity level.
    pub severity: Severity,

    /// User-supplied message text. Opaque; may be empty.
    pub message: String,

    /// Call site that recorded the entry.
    pub location: SourceLocation,

    /// Optional hint pointing to where a fix belongs, distinct from the
    /// message itself. Never the empty string; absent when not supplied.
    pub context: Option<String>,

    /// Wall-clock capture time. Display only, never used for filtering.
    pub recorded_at: DateTime<Utc>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.severity.short_label(),
            self.recorded_at.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.location,
            self.message
        )?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {context})")?;
        }
        Ok(())
    }
}
