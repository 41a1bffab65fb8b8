//! Structured logging with component context.
//!
//! Every entry carries the emitting component and, optionally, the page it
//! relates to. Entries render as one JSON object per line or as a compact
//! human line, and are handed to a [`LogSink`].

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::sink::{LogSink, StderrSink};

/// Severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name as used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// Unrecognised level name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = if name == "warning" { "warn" } else { name.as_str() };
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// One log line before formatting.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Emitting component, e.g. "order-form" or "cli".
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogEntry {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[LEVEL] component: message (page) | key=value ...`
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] {}: {}", self.level, self.component, self.message);
        if let Some(page) = &self.page {
            let _ = write!(line, " ({})", page);
        }
        for (i, (key, value)) in self.fields.iter().enumerate() {
            line.push_str(if i == 0 { " | " } else { " " });
            let _ = write!(line, "{}={}", key, value);
        }
        line
    }
}

/// How entries are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    Human,
}

/// Logger bound to a component (and optionally a page).
///
/// Clones share the sink.
#[derive(Clone)]
pub struct StructuredLogger {
    component: String,
    page: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("component", &self.component)
            .field("page", &self.page)
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

macro_rules! level_methods {
    ($($plain:ident, $builder:ident => $level:expr;)*) => {
        $(
            pub fn $plain(&self, message: &str) {
                self.log(LogEntry {
                    level: $level,
                    message: message.to_string(),
                    component: self.component.clone(),
                    page: self.page.clone(),
                    fields: BTreeMap::new(),
                });
            }

            pub fn $builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
                LogBuilder::new(self, $level, message)
            }
        )*
    };
}

impl StructuredLogger {
    /// Logger for `component` writing JSON at info and above to stderr.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            page: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: Arc::new(StderrSink),
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Same settings and sink, different component.
    pub fn child(&self, component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..self.clone()
        }
    }

    level_methods! {
        trace, trace_builder => LogLevel::Trace;
        debug, debug_builder => LogLevel::Debug;
        info, info_builder => LogLevel::Info;
        warn, warn_builder => LogLevel::Warn;
        error, error_builder => LogLevel::Error;
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let line = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        self.sink.write(entry.level, &line);
    }
}

/// Entry with structured fields, emitted by [`LogBuilder::emit`].
#[must_use = "call emit() to write the entry"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    entry: LogEntry,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            entry: LogEntry {
                level,
                message: message.into(),
                component: logger.component.clone(),
                page: logger.page.clone(),
                fields: BTreeMap::new(),
            },
        }
    }

    fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.entry.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn field(self, key: &str, value: impl Into<String>) -> Self {
        self.value(key, value.into())
    }

    pub fn field_i64(self, key: &str, value: i64) -> Self {
        self.value(key, value)
    }

    pub fn field_f64(self, key: &str, value: f64) -> Self {
        self.value(key, value)
    }

    pub fn field_bool(self, key: &str, value: bool) -> Self {
        self.value(key, value)
    }

    pub fn field_list<I, S>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<Value> = values.into_iter().map(|v| Value::String(v.into())).collect();
        self.value(key, list)
    }

    pub fn emit(self) {
        self.logger.log(self.entry);
    }
}
