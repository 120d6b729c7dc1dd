// logledger - core/render.rs
//
// Human-readable rendering of log entries.
// Writes to any Write implementor; `LogStore::output` points this at stdout.

use crate::core::model::LogEntry;
use std::io::Write;

/// Writes entries to `writer`, one line per entry, in the given order.
///
/// An empty sequence writes nothing. Line shape:
/// `[WARN ] 2026-08-30 10:15:02.417 src/db.rs:42 slow query (context: db.rs:42)`
pub fn write_entries<'a, W, I>(mut writer: W, entries: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a LogEntry>,
{
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}

/// Renders entries to a String. Convenience over `write_entries` for
/// hosts that want the text rather than a stream.
pub fn render_entries<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Severity, SourceLocation};
    use chrono::Utc;

    fn make_entry(severity: Severity, message: &str, context: Option<&str>) -> LogEntry {
        LogEntry {
            severity,
            message: message.to_string(),
            location: SourceLocation {
                file: "src/db.rs".to_string(),
                line: 42,
            },
            context: context.map(str::to_string),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_writes_one_line_per_entry() {
        let entries = vec![
            make_entry(Severity::Info, "started", None),
            make_entry(Severity::Error, "fatal", Some("db.rs:42")),
        ];
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("[INFO ]"));
        assert!(output.contains("started"));
        assert!(output.contains("fatal (context: db.rs:42)"));
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        let entries: Vec<LogEntry> = Vec::new();
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_render_matches_write() {
        let entries = vec![make_entry(Severity::Warn, "slow query", None)];
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries).unwrap();
        assert_eq!(render_entries(&entries), String::from_utf8(buf).unwrap());
    }
}
