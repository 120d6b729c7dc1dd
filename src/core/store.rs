// logledger - core/store.rs
//
// The log buffer itself: an owned, append-only-until-cleared sequence
// of entries with severity-filtered query, render, and clear operations.
// An explicit instance, not a process-wide singleton; the host's
// composition root owns it and hands out references.

use crate::core::model::{LogEntry, Severity, SourceLocation};
use crate::core::render;
use chrono::Utc;
use std::io;
use std::panic::Location;

/// In-process buffer of leveled log entries.
///
/// All query operations take an `Option<Severity>` filter; `None` matches
/// every entry. Insertion order is preserved throughout and is the only
/// entry identity.
#[derive(Debug, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Recording
    // -------------------------------------------------------------------------

    /// Records an info entry. The stored location is this call site.
    #[track_caller]
    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Severity::Info, message, None);
    }

    /// Records an info entry with a context hint.
    #[track_caller]
    pub fn info_with(&mut self, message: impl Into<String>, context: impl Into<String>) {
        self.record(Severity::Info, message, Some(context.into()));
    }

    /// Records a warning. The stored location is this call site.
    #[track_caller]
    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(Severity::Warn, message, None);
    }

    /// Records a warning with a context hint.
    #[track_caller]
    pub fn warn_with(&mut self, message: impl Into<String>, context: impl Into<String>) {
        self.record(Severity::Warn, message, Some(context.into()));
    }

    /// Records an error. The stored location is this call site.
    #[track_caller]
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Severity::Error, message, None);
    }

    /// Records an error with a context hint.
    #[track_caller]
    pub fn error_with(&mut self, message: impl Into<String>, context: impl Into<String>) {
        self.record(Severity::Error, message, Some(context.into()));
    }

    /// General record form the severity helpers delegate to.
    ///
    /// Accepts any message, including the empty string; no validation is
    /// performed and recording never fails.
    #[track_caller]
    pub fn record(&mut self, severity: Severity, message: impl Into<String>, context: Option<String>) {
        let location = SourceLocation::from(Location::caller());
        self.record_at(severity, message, context, location);
    }

    /// Records an entry with an explicitly supplied location.
    ///
    /// For wrapper layers that log on behalf of their own callers: mark the
    /// wrapper `#[track_caller]` and forward `Location::caller()` here.
    /// Wrappers with no meaningful call site pass `SourceLocation::unknown()`.
    pub fn record_at(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        context: Option<String>,
        location: SourceLocation,
    ) {
        let entry = LogEntry {
            severity,
            message: message.into(),
            location,
            // Empty context carries no hint; normalise to absent.
            context: context.filter(|c| !c.is_empty()),
            recorded_at: Utc::now(),
        };
        tracing::trace!(severity = %entry.severity, location = %entry.location, "Entry recorded");
        self.entries.push(entry);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Number of entries matching the filter; total count when `None`.
    pub fn count(&self, severity: Option<Severity>) -> usize {
        self.filtered(severity).count()
    }

    /// Whether at least one matching entry exists. Short-circuits.
    pub fn has(&self, severity: Option<Severity>) -> bool {
        self.filtered(severity).next().is_some()
    }

    /// Cloned snapshot of matching entries, in insertion order.
    ///
    /// Mutating the returned entries cannot affect the live store.
    pub fn retrieve(&self, severity: Option<Severity>) -> Vec<LogEntry> {
        self.filtered(severity).cloned().collect()
    }

    /// Immutable view of the full live sequence.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Renders matching entries to stdout, one line per entry.
    ///
    /// Presentation convenience over `retrieve`; see `core::render` for the
    /// writer-generic form.
    pub fn output(&self, severity: Option<Severity>) -> io::Result<()> {
        let stdout = io::stdout();
        render::write_entries(stdout.lock(), self.filtered(severity))
    }

    // -------------------------------------------------------------------------
    // Clearing
    // -------------------------------------------------------------------------

    /// Removes matching entries; everything when `None`.
    ///
    /// Remaining entries keep their values and relative order.
    pub fn clear(&mut self, severity: Option<Severity>) {
        let before = self.entries.len();
        match severity {
            Some(s) => self.entries.retain(|e| e.severity != s),
            None => self.entries.clear(),
        }
        tracing::debug!(
            filter = ?severity,
            removed = before - self.entries.len(),
            "Store cleared"
        );
    }

    fn filtered(&self, severity: Option<Severity>) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |e| severity.map_or(true, |s| e.severity == s))
    }
}
