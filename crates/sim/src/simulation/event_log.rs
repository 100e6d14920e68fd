//! Human-readable event log of a simulation session.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Danger,
    Success,
    Warning,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// Level used when forwarding to the `log` facade.
    fn facade_level(self) -> log::Level {
        match self {
            Self::Info | Self::Success => log::Level::Info,
            Self::Danger | Self::Warning => log::Level::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub generation: usize,
    pub message: String,
    pub level: LogLevel,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Gen {}] {}", self.generation, self.message)
    }
}

/// Append-only list of [`LogEntry`] records.
///
/// Every pushed entry is also emitted through the `log` crate so headless
/// runs see the same messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, generation: usize, message: impl Into<String>, level: LogLevel) {
        let entry = LogEntry {
            generation,
            message: message.into(),
            level,
        };
        log::log!(entry.level.facade_level(), "{entry}");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
