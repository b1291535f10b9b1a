//! Injected logging capability
//!
//! Soft failures (missing model, missing controller) are reported through a
//! logger passed into each operation rather than a module-wide singleton, so
//! hosts and tests decide where messages go.

use std::cell::RefCell;

/// Severity of a reported event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

/// Reporting capability handed to each operation
pub trait EventLog {
    fn log(&self, level: LogLevel, message: &str);

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
}

/// Logger that forwards to the `tracing` macros
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl EventLog for TracingLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => tracing::error!("{message}"),
            LogLevel::Warning => tracing::warn!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
        }
    }
}

/// Logger that records entries in memory, for assertions in tests and
/// headless diagnostics. Single-threaded, like the rest of the plugin
/// surface.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries in order
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    /// Recorded messages at error level
    pub fn errors(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(level, _)| *level == LogLevel::Error)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl EventLog for RecordingLog {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_log_captures_levels() {
        let log = RecordingLog::new();
        assert!(log.is_empty());

        log.error("model missing");
        log.warning("retrying later");
        log.info("attached");

        assert_eq!(log.entries().len(), 3);
        assert_eq!(log.errors(), vec!["model missing".to_string()]);
    }
}
