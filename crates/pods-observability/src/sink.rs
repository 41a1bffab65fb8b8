//! Log output destinations.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::logging::LogLevel;

/// Receives formatted log lines.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes to stderr so stdout stays clean for command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory. Used in tests.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("lines", &self.entries().len())
            .finish()
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push((level, line.to_string()));
    }
}
