// In-memory log capture for the TUI log panel
//
// A custom tracing layer stores recent events in a bounded ring buffer.
// In TUI mode nothing may print to stdout (it would garble the alternate
// screen), so the panel reads from this buffer each frame instead.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Ring buffer capacity; old entries fall off the front
const MAX_LOG_ENTRIES: usize = 500;

/// A single captured log event
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

/// Bounded, shareable buffer of recent log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of all entries, oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }
}

/// Tracing layer that feeds the log panel buffer
pub struct PanelLogLayer {
    buffer: LogBuffer,
}

impl PanelLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for PanelLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));

        self.buffer.push(LogEntry {
            timestamp: Utc::now(),
            level: *event.metadata().level(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Level filtering happens in the subscriber's EnvFilter
        true
    }
}

/// Extracts the `message` field from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
            // Strip the quotes Debug puts around plain strings
            if self.0.starts_with('"') && self.0.ends_with('"') && self.0.len() >= 2 {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_keeps_insertion_order() {
        let buffer = LogBuffer::new();
        for i in 0..3 {
            buffer.push(LogEntry {
                timestamp: Utc::now(),
                level: Level::INFO,
                message: format!("entry {i}"),
            });
        }
        let entries = buffer.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 0");
        assert_eq!(entries[2].message, "entry 2");
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_ENTRIES + 10 {
            buffer.push(LogEntry {
                timestamp: Utc::now(),
                level: Level::DEBUG,
                message: format!("entry {i}"),
            });
        }
        let entries = buffer.snapshot();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        // The oldest ten were dropped
        assert_eq!(entries[0].message, "entry 10");
    }
}
